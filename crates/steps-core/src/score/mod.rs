//! Score-related types and data structures.
//!
//! This module contains types for representing results:
//! - `Grade` - letter grades (E, D, C, B, A, AA, AAA, AAAA)
//! - `HighScore`, `HighScoreList` - bounded per-chart ranking

mod grade;
mod high_score;

pub use grade::*;
pub use high_score::*;

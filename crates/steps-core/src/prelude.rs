//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from steps-core.
//!
//! # Usage
//!
//! ```ignore
//! use steps_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Chart types: `Chart`, `ChartSet`, `ChartId`, `Layout`, `Difficulty`
//! - Note data: `NoteData`, `TapNote`
//! - Score types: `Grade`, `HighScore`, `HighScoreList`
//! - Configuration: `ChartConfig`
//! - Error handling: `Error`, `Result`

// Chart types
pub use crate::chart::{Chart, ChartId, ChartSet, Difficulty, Layout, RadarCategory, RadarValues};

// Note data
pub use crate::notes::{NoteData, TapNote};

// Score types
pub use crate::score::{Grade, HighScore, HighScoreList};

// Configuration
pub use crate::config::ChartConfig;

// Error handling
pub use crate::error::{Error, Result};

//! Chart-related types and data structures.
//!
//! This module contains types for representing the charts of a song:
//! - `Layout` - controller layouts and their track counts
//! - `Difficulty` - difficulty classes (Beginner, Easy, Medium, Hard, Challenge)
//! - `RadarCategory`, `RadarValues` - derived play-characteristic metrics
//! - `Chart` - one chart with lazily converted note data
//! - `ChartSet`, `ChartId` - the charts of a song, including autogen charts

mod difficulty;
mod layout;
mod radar;
mod set;
mod types;

pub use difficulty::*;
pub use layout::*;
pub use radar::*;
pub use set::*;
pub use types::Chart;

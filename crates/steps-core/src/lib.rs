//! # steps-core
//!
//! Step chart data for one song.
//!
//! This crate provides:
//! - Lazy conversion of chart notes between their text form and a note grid
//! - Autogen charts derived from a chart of another layout by track remapping
//! - Difficulty, meter and description cleanup
//! - Bounded, ranked high-score lists per chart

pub mod autogen;
pub mod chart;
pub mod config;
pub mod error;
pub mod notes;
pub mod prelude;
pub mod score;

// Re-export from chart module
pub use chart::{
    Chart, ChartId, ChartSet, Difficulty, Layout, NUM_RADAR_CATEGORIES, RadarCategory,
    RadarValues,
};

// Re-export from config module
pub use config::ChartConfig;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from notes module
pub use notes::{FormatError, NoteData, TapNote, fix_impossible_rows};

// Re-export from score module
pub use score::{Grade, HighScore, HighScoreList};

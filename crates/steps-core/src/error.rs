use thiserror::Error;

use crate::chart::{ChartId, RadarCategory};
use crate::notes::FormatError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Track count mismatch: layout expects {expected} tracks, note data has {actual}")]
    TrackCountMismatch { expected: usize, actual: usize },

    #[error("Invalid hold: note on track {track} at row {row} overlaps a hold or has no length")]
    InvalidHold { track: usize, row: usize },

    #[error("Invalid radar value {value} for {category}")]
    InvalidRadarValue { category: RadarCategory, value: f32 },

    #[error("Unknown chart: {0}")]
    UnknownChart(ChartId),

    #[error("Autogen cycle: {chart} cannot derive from {source_chart}")]
    AutogenCycle {
        chart: ChartId,
        source_chart: ChartId,
    },

    #[error("Note data format error: {0}")]
    Format(#[from] FormatError),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

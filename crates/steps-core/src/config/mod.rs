//! Configuration and fixed tuning values.
//!
//! This module contains:
//! - `ChartConfig` - per-song-set settings loaded from a JSON file
//! - Note timing resolution constants
//! - Ranking and autogen constants

mod chart_config;

pub use chart_config::*;

/// Note timing resolution.
///
/// Rows are the smallest addressable time step of a note grid.
pub mod timing {
    /// Rows per beat (quarter note).
    pub const ROWS_PER_BEAT: usize = 48;

    /// Beats per measure.
    pub const BEATS_PER_MEASURE: usize = 4;

    /// Rows per measure (192).
    pub const ROWS_PER_MEASURE: usize = ROWS_PER_BEAT * BEATS_PER_MEASURE;
}

/// High score ranking configuration.
pub mod ranking {
    /// Number of high scores kept per chart unless configured otherwise.
    pub const NUM_RANKING_LINES: usize = 5;
}

/// Autogen track remapping configuration.
pub mod autogen {
    /// Measures between shifts of the sliding window when expanding a chart
    /// onto more tracks.
    pub const SLIDING_WINDOW_MEASURES: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_constants() {
        assert_eq!(timing::ROWS_PER_MEASURE, 192);
        assert_eq!(timing::ROWS_PER_MEASURE % 4, 0);
    }

    #[test]
    fn test_ranking_constants() {
        assert_eq!(ranking::NUM_RANKING_LINES, 5);
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ranking::NUM_RANKING_LINES;
use crate::error::{Error, Result};

/// Settings shared by every chart of a [`ChartSet`](crate::chart::ChartSet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Maximum number of high scores kept per chart.
    pub ranking_lines: usize,
    /// Compress the note data of an autogen chart once it has been detached
    /// from its source.
    pub compress_on_detach: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ranking_lines: NUM_RANKING_LINES,
            compress_on_detach: true,
        }
    }
}

impl ChartConfig {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from JSON content. Missing keys keep their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.ranking_lines == 0 {
            return Err(Error::ConfigParseError(
                "ranking_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

/// Derived play-characteristic metrics of a chart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumCount,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum RadarCategory {
    Stream = 0,
    Voltage = 1,
    Air = 2,
    Freeze = 3,
    Chaos = 4,
}

impl std::fmt::Display for RadarCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

pub const NUM_RADAR_CATEGORIES: usize = RadarCategory::COUNT;

/// Radar values for every [`RadarCategory`]. Unknown entries hold
/// [`RadarValues::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; NUM_RADAR_CATEGORIES]")]
pub struct RadarValues([f32; NUM_RADAR_CATEGORIES]);

impl TryFrom<[f32; NUM_RADAR_CATEGORIES]> for RadarValues {
    type Error = Error;

    fn try_from(values: [f32; NUM_RADAR_CATEGORIES]) -> Result<Self> {
        let mut radar = Self::default();
        for (category, value) in RadarCategory::iter().zip(values) {
            if !radar.set(category, value) {
                return Err(Error::InvalidRadarValue { category, value });
            }
        }
        Ok(radar)
    }
}

impl Default for RadarValues {
    fn default() -> Self {
        Self([Self::UNKNOWN; NUM_RADAR_CATEGORIES])
    }
}

impl RadarValues {
    pub const UNKNOWN: f32 = -1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: RadarCategory) -> f32 {
        self.0[category as usize]
    }

    /// Returns false (and leaves the value alone) for a negative value other
    /// than [`RadarValues::UNKNOWN`].
    pub fn set(&mut self, category: RadarCategory, value: f32) -> bool {
        if !Self::is_acceptable(value) {
            return false;
        }
        self.0[category as usize] = value;
        true
    }

    pub fn is_known(&self, category: RadarCategory) -> bool {
        self.get(category) != Self::UNKNOWN
    }

    pub fn is_acceptable(value: f32) -> bool {
        value == Self::UNKNOWN || value >= 0.0
    }

    /// Sum of all categories, unknown entries included as-is.
    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[f32; NUM_RADAR_CATEGORIES] {
        &self.0
    }
}

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Difficulty {
    #[strum(to_string = "beginner")]
    Beginner = 0,
    #[strum(to_string = "easy", serialize = "basic", serialize = "light")]
    Easy = 1,
    #[strum(
        to_string = "medium",
        serialize = "another",
        serialize = "trick",
        serialize = "standard",
        serialize = "difficult"
    )]
    Medium = 2,
    #[strum(
        to_string = "hard",
        serialize = "ssr",
        serialize = "maniac",
        serialize = "heavy"
    )]
    Hard = 3,
    #[strum(
        to_string = "challenge",
        serialize = "smaniac",
        serialize = "expert",
        serialize = "oni"
    )]
    Challenge = 4,
    /// Unset. Never written to a file.
    #[default]
    #[strum(to_string = "invalid")]
    Invalid = 5,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Parse a difficulty name or one of its aliases ("basic", "maniac", ...).
    /// Unrecognized names give [`Difficulty::Invalid`].
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or(Self::Invalid)
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::Invalid
    }

    /// Lowercase canonical name (e.g., "medium")
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Capitalized name used as the default chart description (e.g., "Medium")
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Challenge => "Challenge",
            Self::Invalid => "Invalid",
        }
    }

    /// Guess a difficulty from a meter when nothing better is known.
    pub fn from_meter(meter: i32) -> Self {
        if meter == 1 {
            Self::Beginner
        } else if meter <= 3 {
            Self::Easy
        } else if meter <= 6 {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    /// Typical meter for this difficulty, used when a chart has none.
    pub fn default_meter(&self) -> i32 {
        match self {
            Self::Beginner => 1,
            Self::Easy => 3,
            Self::Medium => 5,
            Self::Hard | Self::Challenge => 8,
            Self::Invalid => 5,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_u8() {
        assert_eq!(Difficulty::from_u8(0), Some(Difficulty::Beginner));
        assert_eq!(Difficulty::from_u8(4), Some(Difficulty::Challenge));
        assert_eq!(Difficulty::from_u8(5), Some(Difficulty::Invalid));
        assert_eq!(Difficulty::from_u8(6), None);
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Difficulty::from_name("beginner"), Difficulty::Beginner);
        assert_eq!(Difficulty::from_name("Basic"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("LIGHT"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("another"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("Trick"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("maniac"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("heavy"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("SManiac"), Difficulty::Challenge);
        assert_eq!(Difficulty::from_name("oni"), Difficulty::Challenge);
        assert_eq!(Difficulty::from_name(" hard "), Difficulty::Hard);
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(Difficulty::from_name(""), Difficulty::Invalid);
        assert_eq!(Difficulty::from_name("Copied from Hard"), Difficulty::Invalid);
    }

    #[test]
    fn test_names() {
        assert_eq!(Difficulty::Medium.name(), "medium");
        assert_eq!(Difficulty::Medium.display_name(), "Medium");
        assert_eq!(Difficulty::Challenge.to_string(), "challenge");
    }

    #[test]
    fn test_from_meter() {
        assert_eq!(Difficulty::from_meter(1), Difficulty::Beginner);
        assert_eq!(Difficulty::from_meter(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_meter(3), Difficulty::Easy);
        assert_eq!(Difficulty::from_meter(6), Difficulty::Medium);
        assert_eq!(Difficulty::from_meter(7), Difficulty::Hard);
        assert_eq!(Difficulty::from_meter(72), Difficulty::Hard);
    }

    #[test]
    fn test_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Easy);
        assert!(Difficulty::Challenge < Difficulty::Invalid);
    }
}

use serde::{Deserialize, Serialize};
use strum::{FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Grade {
    #[default]
    #[strum(serialize = "-")]
    NoData = 0,
    /// Failed run.
    E = 1,
    D = 2,
    C = 3,
    B = 4,
    A = 5,
    #[strum(serialize = "AA")]
    Aa = 6,
    #[strum(serialize = "AAA")]
    Aaa = 7,
    #[strum(serialize = "AAAA")]
    Aaaa = 8,
}

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade of a cleared run from its share of the possible dance points.
    pub fn from_dance_points_ratio(ratio: f32) -> Self {
        if ratio >= 1.0 {
            Self::Aaaa
        } else if ratio >= 0.93 {
            Self::Aaa
        } else if ratio >= 0.80 {
            Self::Aa
        } else if ratio >= 0.65 {
            Self::A
        } else if ratio >= 0.45 {
            Self::B
        } else if ratio >= 0.0 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_from_dance_points_ratio() {
        assert_eq!(Grade::from_dance_points_ratio(1.0), Grade::Aaaa);
        assert_eq!(Grade::from_dance_points_ratio(0.95), Grade::Aaa);
        assert_eq!(Grade::from_dance_points_ratio(0.93), Grade::Aaa);
        assert_eq!(Grade::from_dance_points_ratio(0.85), Grade::Aa);
        assert_eq!(Grade::from_dance_points_ratio(0.7), Grade::A);
        assert_eq!(Grade::from_dance_points_ratio(0.5), Grade::B);
        assert_eq!(Grade::from_dance_points_ratio(0.1), Grade::C);
        assert_eq!(Grade::from_dance_points_ratio(-0.2), Grade::D);
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::Aaaa > Grade::Aaa);
        assert!(Grade::A > Grade::B);
        assert!(Grade::E > Grade::NoData);
    }

    #[test]
    fn test_grade_names() {
        assert_eq!(Grade::Aa.to_string(), "AA");
        assert_eq!(Grade::B.to_string(), "B");
        assert_eq!(Grade::NoData.to_string(), "-");
        assert_eq!(Grade::from_u8(8), Some(Grade::Aaaa));
    }
}

//! Level-banded character titles
//!
//! The domain only picks the tier; the displayed text comes from a
//! localization lookup keyed by [`TitleTier::key`].

use serde::{Deserialize, Serialize};

/// One of six title bands: `<=9, <=19, <=29, <=39, <=49, 50+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleTier {
    Novice,
    Apprentice,
    Journeyman,
    Veteran,
    Master,
    Legend,
}

impl TitleTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=9 => Self::Novice,
            10..=19 => Self::Apprentice,
            20..=29 => Self::Journeyman,
            30..=39 => Self::Veteran,
            40..=49 => Self::Master,
            _ => Self::Legend,
        }
    }

    /// Localization key, `titles.1` through `titles.6`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Novice => "titles.1",
            Self::Apprentice => "titles.2",
            Self::Journeyman => "titles.3",
            Self::Veteran => "titles.4",
            Self::Master => "titles.5",
            Self::Legend => "titles.6",
        }
    }
}

//! Aggregate output of one resolution pass.
//!
//! # Invariants
//! - Results carry derived values only and have no identity.
//! - Every text field is populated; missing lookups hold [`UNKNOWN`].

use super::entry::{FestivalEntry, RetrogradeEntry};
use super::season::Season;
use super::UNKNOWN;
use serde::{Deserialize, Serialize};

/// Illumination threshold at or above which the full-moon triad applies.
pub const FULL_MOON_THRESHOLD: f64 = 0.9;
/// Illumination threshold at or above which the waxing/waning triad applies.
pub const HALF_MOON_THRESHOLD: f64 = 0.4;

/// Three-way moon influence derived from illumination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonTriad {
    Full,
    WaxingWaning,
    NewCrescent,
}

impl MoonTriad {
    /// Classifies illumination; both thresholds are inclusive lower bounds.
    pub fn from_illumination(illumination: f64) -> Self {
        if illumination >= FULL_MOON_THRESHOLD {
            Self::Full
        } else if illumination >= HALF_MOON_THRESHOLD {
            Self::WaxingWaning
        } else {
            Self::NewCrescent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Full-moon influence",
            Self::WaxingWaning => "Waxing/waning influence",
            Self::NewCrescent => "New/crescent influence",
        }
    }

    /// Lunar patron presiding over this part of the cycle.
    pub fn patron(self) -> &'static str {
        match self {
            Self::Full => "Selene",
            Self::WaxingWaning => "Hecate",
            Self::NewCrescent => "Artemis",
        }
    }
}

/// Festival chosen for a date plus the whole days until it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingFestival {
    pub festival: FestivalEntry,
    /// Zero on the festival day, negative when the list wrapped around.
    pub days_remaining: i64,
}

/// Resolved zodiac sign, or the unknown sentinel pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacMatch {
    pub sign: String,
    pub deity: String,
}

impl ZodiacMatch {
    pub fn unknown() -> Self {
        Self {
            sign: UNKNOWN.to_string(),
            deity: UNKNOWN.to_string(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.sign != UNKNOWN
    }
}

/// Everything displayed for one `(date, hemisphere, reading)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub moon_phase: String,
    pub moon_name: String,
    pub illumination: f64,
    /// Weekday rulers, e.g. `Gaia, Selene`.
    pub ruling_deities: String,
    pub lunar_deity: String,
    pub moon_triad: MoonTriad,
    pub season: Season,
    /// Season ruler display text, e.g. `Zeus (Air)`.
    pub season_ruler: String,
    pub next_festival: Option<UpcomingFestival>,
    pub zodiac: ZodiacMatch,
    /// Labeled same-day events such as `Eclipse: Total Lunar Eclipse`.
    pub rare_events: Vec<String>,
    pub active_retrogrades: Vec<RetrogradeEntry>,
}

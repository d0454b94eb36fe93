//! Externally supplied moon-phase reading.
//!
//! # Invariants
//! - A sanitized reading always has non-empty names.
//! - A sanitized reading always has finite illumination within `[0, 1]`.

use super::UNKNOWN;
use serde::{Deserialize, Serialize};

/// Moon data as reported by the phase service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonReading {
    /// Phase label as reported, e.g. `Waxing Gibbous`.
    pub phase_name: String,
    /// Illuminated fraction, `0.0` (new) to `1.0` (full).
    pub illumination: f64,
    /// Traditional moon name, e.g. `Worm Moon`.
    pub moon_name: String,
}

impl MoonReading {
    /// Builds a reading from untrusted optional parts.
    ///
    /// Blank names become [`UNKNOWN`]; missing or non-finite illumination
    /// becomes `0.0`; finite values are clamped into `[0, 1]`.
    pub fn sanitized(
        phase_name: Option<&str>,
        illumination: Option<f64>,
        moon_name: Option<&str>,
    ) -> Self {
        Self {
            phase_name: name_or_unknown(phase_name),
            illumination: clamp_illumination(illumination),
            moon_name: name_or_unknown(moon_name),
        }
    }

    /// Returns a sanitized copy of this reading.
    pub fn normalized(&self) -> Self {
        Self::sanitized(
            Some(self.phase_name.as_str()),
            Some(self.illumination),
            Some(self.moon_name.as_str()),
        )
    }

    /// Reading used when the phase service is unavailable.
    pub fn unknown() -> Self {
        Self::sanitized(None, None, None)
    }
}

/// Parses illumination text the way lenient feeds report it.
///
/// Accepts plain numbers with surrounding whitespace; anything else is `None`.
pub fn parse_illumination(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn name_or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn clamp_illumination(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => 0.0,
    }
}

//! Query inputs: calendar date plus hemisphere selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Hemisphere selection controlling season mapping and festival lists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    /// Both hemispheres in canonical order.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Northern, Hemisphere::Southern];

    /// Derives the hemisphere from a geographic latitude in degrees.
    ///
    /// Negative latitudes are southern; the equator counts as northern.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Self::Southern
        } else {
            Self::Northern
        }
    }

    /// Stable lowercase identifier used in storage and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Southern => "southern",
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text does not name a hemisphere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHemisphereError(pub String);

impl Display for ParseHemisphereError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported hemisphere `{}`; expected northern|southern",
            self.0
        )
    }
}

impl Error for ParseHemisphereError {}

impl FromStr for Hemisphere {
    type Err = ParseHemisphereError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Self::Northern),
            "southern" | "south" | "s" => Ok(Self::Southern),
            other => Err(ParseHemisphereError(other.to_string())),
        }
    }
}

/// One resolution request.
///
/// The date is a plain local calendar date; no time-of-day or zone is
/// carried, so every day-granular rule compares dates directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentQuery {
    pub date: NaiveDate,
    pub hemisphere: Hemisphere,
}

impl AlignmentQuery {
    pub fn new(date: NaiveDate, hemisphere: Hemisphere) -> Self {
        Self { date, hemisphere }
    }
}

#[cfg(test)]
mod tests {
    use super::Hemisphere;

    #[test]
    fn parses_hemisphere_case_insensitively() {
        assert_eq!(" Southern ".parse::<Hemisphere>(), Ok(Hemisphere::Southern));
        assert_eq!("NORTH".parse::<Hemisphere>(), Ok(Hemisphere::Northern));
        assert!("eastern".parse::<Hemisphere>().is_err());
    }

    #[test]
    fn latitude_sign_selects_hemisphere() {
        assert_eq!(Hemisphere::from_latitude(-33.87), Hemisphere::Southern);
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(51.5), Hemisphere::Northern);
    }
}

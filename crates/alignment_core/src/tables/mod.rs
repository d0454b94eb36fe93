//! Static rule tables and their one-time loading.
//!
//! # Responsibility
//! - Decode the JSON table document into typed entries.
//! - Reject malformed configuration once, at load time.
//! - Expose read-only lookups to the resolvers.
//!
//! # Invariants
//! - A constructed `AlignmentTables` has passed validation and never changes.
//! - Each hemisphere has at least one festival; festival dates are distinct
//!   within a hemisphere.
//! - Every season has a ruler.

mod validate;

use crate::model::entry::{DatedEvent, FestivalEntry, RetrogradeEntry, SeasonRuler, ZodiacEntry};
use crate::model::query::Hemisphere;
use crate::model::season::Season;
use chrono::NaiveDate;
use log::{error, info};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

const BUILTIN_TABLES_JSON: &str = include_str!("default_tables.json");

static BUILTIN_TABLES: OnceCell<AlignmentTables> = OnceCell::new();

pub type TableResult<T> = Result<T, TableError>;

/// Fatal configuration faults surfaced while loading tables.
#[derive(Debug)]
pub enum TableError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    EmptyTable(&'static str),
    EmptyName(&'static str),
    UnknownSeason(String),
    MissingSeasonRuler(Season),
    UnknownWeekday(String),
    EmptyFestivalList(Hemisphere),
    DuplicateFestivalDate {
        hemisphere: Hemisphere,
        date: NaiveDate,
    },
    InvalidZodiacRange {
        sign: String,
        range: [u32; 4],
    },
    InvalidRetrograde {
        planet: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read tables `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid table document: {err}"),
            Self::EmptyTable(name) => write!(f, "table `{name}` must not be empty"),
            Self::EmptyName(table) => write!(f, "table `{table}` contains an empty name"),
            Self::UnknownSeason(value) => write!(f, "season ruler key is unknown: {value}"),
            Self::MissingSeasonRuler(season) => write!(f, "season ruler missing for {season}"),
            Self::UnknownWeekday(value) => write!(f, "weekday key is unknown: {value}"),
            Self::EmptyFestivalList(hemisphere) => {
                write!(f, "festival list for {hemisphere} hemisphere must not be empty")
            }
            Self::DuplicateFestivalDate { hemisphere, date } => write!(
                f,
                "festival date {date} is duplicated in {hemisphere} hemisphere"
            ),
            Self::InvalidZodiacRange { sign, range } => {
                write!(f, "zodiac range for {sign} is invalid: {range:?}")
            }
            Self::InvalidRetrograde { planet, start, end } => write!(
                f,
                "retrograde window for {planet} ends ({end}) before it starts ({start})"
            ),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire shape of the table document before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTables {
    pub moon_deities: BTreeMap<String, String>,
    pub weekday_deities: BTreeMap<String, String>,
    pub season_rulers: BTreeMap<String, SeasonRuler>,
    pub festivals: RawFestivals,
    pub zodiac: Vec<ZodiacEntry>,
    #[serde(default)]
    pub eclipses: Vec<DatedEvent>,
    #[serde(default)]
    pub meteor_showers: Vec<DatedEvent>,
    #[serde(default)]
    pub planetary_alignments: Vec<DatedEvent>,
    #[serde(default)]
    pub dark_moons: Vec<DatedEvent>,
    #[serde(default)]
    pub retrogrades: Vec<RetrogradeEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFestivals {
    pub northern: Vec<FestivalEntry>,
    pub southern: Vec<FestivalEntry>,
}

/// Validated, immutable rule tables.
#[derive(Debug, Clone)]
pub struct AlignmentTables {
    moon_deities: BTreeMap<String, String>,
    weekday_deities: BTreeMap<String, String>,
    season_rulers: [SeasonRuler; 4],
    northern_festivals: Vec<FestivalEntry>,
    southern_festivals: Vec<FestivalEntry>,
    zodiac: Vec<ZodiacEntry>,
    eclipses: Vec<DatedEvent>,
    meteor_showers: Vec<DatedEvent>,
    planetary_alignments: Vec<DatedEvent>,
    dark_moons: Vec<DatedEvent>,
    retrogrades: Vec<RetrogradeEntry>,
}

impl AlignmentTables {
    /// Parses and validates a JSON table document.
    ///
    /// # Errors
    /// - Returns `TableError::Json` for syntax or shape errors.
    /// - Returns a validation variant for semantically invalid tables.
    pub fn from_json_str(raw: &str) -> TableResult<Self> {
        let document: RawTables = serde_json::from_str(raw)?;
        validate::build(document)
    }

    /// Reads, parses and validates a JSON table file.
    ///
    /// # Side effects
    /// - Emits a `tables_load` logging event with duration and status.
    pub fn from_json_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let started_at = Instant::now();
        let result = std::fs::read_to_string(path)
            .map_err(|source| TableError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|raw| Self::from_json_str(&raw));
        log_load("file", started_at, &result);
        result
    }

    /// Returns the embedded default tables, parsed once per process.
    pub fn builtin() -> TableResult<&'static AlignmentTables> {
        BUILTIN_TABLES.get_or_try_init(|| {
            let started_at = Instant::now();
            let result = Self::from_json_str(BUILTIN_TABLES_JSON);
            log_load("builtin", started_at, &result);
            result
        })
    }

    pub(crate) fn from_parts(
        moon_deities: BTreeMap<String, String>,
        weekday_deities: BTreeMap<String, String>,
        season_rulers: [SeasonRuler; 4],
        festivals: RawFestivals,
        zodiac: Vec<ZodiacEntry>,
        events: [Vec<DatedEvent>; 4],
        retrogrades: Vec<RetrogradeEntry>,
    ) -> Self {
        let [eclipses, meteor_showers, planetary_alignments, dark_moons] = events;
        Self {
            moon_deities,
            weekday_deities,
            season_rulers,
            northern_festivals: festivals.northern,
            southern_festivals: festivals.southern,
            zodiac,
            eclipses,
            meteor_showers,
            planetary_alignments,
            dark_moons,
            retrogrades,
        }
    }

    /// Deity associated with a traditional moon name.
    pub fn lunar_deity(&self, moon_name: &str) -> Option<&str> {
        self.moon_deities
            .get(normalize_moon_name(moon_name).as_str())
            .map(String::as_str)
    }

    /// Ruling deities for a weekday name such as `Monday`.
    pub fn weekday_deities(&self, weekday: &str) -> Option<&str> {
        self.weekday_deities.get(weekday).map(String::as_str)
    }

    pub fn season_ruler(&self, season: Season) -> &SeasonRuler {
        &self.season_rulers[season_index(season)]
    }

    /// Festival list for a hemisphere, in configured order.
    pub fn festivals(&self, hemisphere: Hemisphere) -> &[FestivalEntry] {
        match hemisphere {
            Hemisphere::Northern => &self.northern_festivals,
            Hemisphere::Southern => &self.southern_festivals,
        }
    }

    pub fn zodiac(&self) -> &[ZodiacEntry] {
        &self.zodiac
    }

    pub fn eclipses(&self) -> &[DatedEvent] {
        &self.eclipses
    }

    pub fn meteor_showers(&self) -> &[DatedEvent] {
        &self.meteor_showers
    }

    pub fn planetary_alignments(&self) -> &[DatedEvent] {
        &self.planetary_alignments
    }

    pub fn dark_moons(&self) -> &[DatedEvent] {
        &self.dark_moons
    }

    pub fn retrogrades(&self) -> &[RetrogradeEntry] {
        &self.retrogrades
    }
}

/// Folds typographic apostrophes so `Hunter’s Moon` and `Hunter's Moon` match.
pub(crate) fn normalize_moon_name(value: &str) -> String {
    value.trim().replace(['\u{2019}', '\u{2018}'], "'")
}

pub(crate) fn season_index(season: Season) -> usize {
    match season {
        Season::Spring => 0,
        Season::Summer => 1,
        Season::Autumn => 2,
        Season::Winter => 3,
    }
}

fn log_load(source: &str, started_at: Instant, result: &TableResult<AlignmentTables>) {
    match result {
        Ok(tables) => info!(
            "event=tables_load module=tables status=ok source={} duration_ms={} festivals_northern={} festivals_southern={} zodiac={} retrogrades={}",
            source,
            started_at.elapsed().as_millis(),
            tables.northern_festivals.len(),
            tables.southern_festivals.len(),
            tables.zodiac.len(),
            tables.retrogrades.len()
        ),
        Err(err) => error!(
            "event=tables_load module=tables status=error source={} duration_ms={} error={}",
            source,
            started_at.elapsed().as_millis(),
            err
        ),
    }
}

//! Alignment resolution engine.
//!
//! # Responsibility
//! - Compose the season, festival, zodiac and event resolvers.
//! - Apply the inline lunar deity, moon-triad and weekday rules.
//!
//! # Invariants
//! - `resolve` is pure and total for every well-typed input.
//! - Incoming readings are re-sanitized before use.

use crate::model::query::AlignmentQuery;
use crate::model::reading::MoonReading;
use crate::model::result::{AlignmentResult, MoonTriad};
use crate::model::UNKNOWN;
use crate::resolve::events::{active_retrogrades, same_day_events};
use crate::resolve::festival::next_festival;
use crate::resolve::season::season_for;
use crate::resolve::zodiac::zodiac_for;
use crate::tables::AlignmentTables;
use chrono::{Datelike, Weekday};

/// Stateless resolver bound to one validated table set.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentEngine<'t> {
    tables: &'t AlignmentTables,
}

impl<'t> AlignmentEngine<'t> {
    pub fn new(tables: &'t AlignmentTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t AlignmentTables {
        self.tables
    }

    /// Resolves every displayed attribute for one query.
    pub fn resolve(&self, query: &AlignmentQuery, reading: &MoonReading) -> AlignmentResult {
        let tables = self.tables;
        let reading = reading.normalized();
        let date = query.date;

        let lunar_deity = tables
            .lunar_deity(&reading.moon_name)
            .unwrap_or(UNKNOWN)
            .to_string();
        let ruling_deities = tables
            .weekday_deities(weekday_name(date.weekday()))
            .unwrap_or(UNKNOWN)
            .to_string();
        let season = season_for(date.month(), query.hemisphere);

        AlignmentResult {
            moon_triad: MoonTriad::from_illumination(reading.illumination),
            illumination: reading.illumination,
            moon_phase: reading.phase_name,
            moon_name: reading.moon_name,
            ruling_deities,
            lunar_deity,
            season,
            season_ruler: tables.season_ruler(season).label(),
            next_festival: next_festival(tables.festivals(query.hemisphere), date),
            zodiac: zodiac_for(tables.zodiac(), date.month(), date.day()),
            rare_events: same_day_events(tables, date).collect(),
            active_retrogrades: active_retrogrades(tables.retrogrades(), date),
        }
    }
}

/// One-shot resolution without keeping an engine around.
pub fn resolve(
    tables: &AlignmentTables,
    query: &AlignmentQuery,
    reading: &MoonReading,
) -> AlignmentResult {
    AlignmentEngine::new(tables).resolve(query, reading)
}

/// English weekday name used as the weekday table key.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

//! Celestial alignment resolution core.
//! Derives moon, deity, season, festival, zodiac and sky-event attributes
//! for a calendar date from injected rule tables.

pub mod logging;
pub mod model;
pub mod moon;
pub mod prefs;
pub mod render;
pub mod resolve;
pub mod tables;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::entry::{
    DatedEvent, FestivalEntry, MonthDayRange, RetrogradeEntry, SeasonRuler, ZodiacEntry,
};
pub use model::query::{AlignmentQuery, Hemisphere, ParseHemisphereError};
pub use model::reading::MoonReading;
pub use model::result::{AlignmentResult, MoonTriad, UpcomingFestival, ZodiacMatch};
pub use model::season::Season;
pub use model::UNKNOWN;
pub use moon::farmsense::{parse_farmsense_payload, MoonFeedError, MoonFeedResult};
pub use prefs::hemisphere::{HemisphereChoice, HemispherePreference, HemisphereSource};
pub use prefs::store::{PreferenceStore, SqlitePreferenceStore};
pub use prefs::{open_prefs_db, open_prefs_db_in_memory, PrefError, PrefResult};
pub use render::{render_lines, DisplayLine, NONE_INDICATOR};
pub use resolve::engine::{resolve, AlignmentEngine};
pub use tables::{AlignmentTables, TableError, TableResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

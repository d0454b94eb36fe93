//! Same-day sky events and active retrograde windows.

use crate::model::entry::{DatedEvent, RetrogradeEntry};
use crate::tables::AlignmentTables;
use chrono::NaiveDate;

pub const ALIGNMENT_LABEL: &str = "Planetary Alignment";
pub const ECLIPSE_LABEL: &str = "Eclipse";
pub const METEOR_SHOWER_LABEL: &str = "Meteor Shower Peak";
pub const DARK_MOON_LABEL: &str = "Dark Moon";

/// Lazily yields labeled events whose stored date equals `date`.
///
/// Order is alignments, eclipses, meteor-shower peaks, then dark moons, each
/// in table order. The iterator is single-pass; callers re-derive it per
/// query.
pub fn same_day_events(
    tables: &AlignmentTables,
    date: NaiveDate,
) -> impl Iterator<Item = String> + '_ {
    let groups: [(&'static str, &[DatedEvent]); 4] = [
        (ALIGNMENT_LABEL, tables.planetary_alignments()),
        (ECLIPSE_LABEL, tables.eclipses()),
        (METEOR_SHOWER_LABEL, tables.meteor_showers()),
        (DARK_MOON_LABEL, tables.dark_moons()),
    ];
    groups.into_iter().flat_map(move |(label, events)| {
        events
            .iter()
            .filter(move |event| event.date == date)
            .map(move |event| format!("{label}: {}", event.name))
    })
}

/// Returns every retrograde whose closed window contains `date`.
pub fn active_retrogrades(entries: &[RetrogradeEntry], date: NaiveDate) -> Vec<RetrogradeEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_active_on(date))
        .cloned()
        .collect()
}

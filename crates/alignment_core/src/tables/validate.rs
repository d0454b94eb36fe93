//! Load-time validation for table documents.

use super::{normalize_moon_name, season_index, AlignmentTables, RawTables, TableError, TableResult};
use crate::model::entry::{DatedEvent, FestivalEntry, SeasonRuler, ZodiacEntry};
use crate::model::query::Hemisphere;
use crate::model::season::Season;
use std::collections::{BTreeMap, BTreeSet};

const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub(super) fn build(raw: RawTables) -> TableResult<AlignmentTables> {
    let moon_deities = validate_moon_deities(raw.moon_deities)?;
    let weekday_deities = validate_weekdays(raw.weekday_deities)?;
    let season_rulers = validate_season_rulers(raw.season_rulers)?;

    validate_festivals(Hemisphere::Northern, &raw.festivals.northern)?;
    validate_festivals(Hemisphere::Southern, &raw.festivals.southern)?;
    validate_zodiac(&raw.zodiac)?;

    let events = [
        raw.eclipses,
        raw.meteor_showers,
        raw.planetary_alignments,
        raw.dark_moons,
    ];
    for (table, entries) in ["eclipses", "meteor_showers", "planetary_alignments", "dark_moons"]
        .into_iter()
        .zip(events.iter())
    {
        validate_events(table, entries)?;
    }

    for retrograde in &raw.retrogrades {
        if retrograde.planet.trim().is_empty() {
            return Err(TableError::EmptyName("retrogrades"));
        }
        if retrograde.start > retrograde.end {
            return Err(TableError::InvalidRetrograde {
                planet: retrograde.planet.clone(),
                start: retrograde.start,
                end: retrograde.end,
            });
        }
    }

    Ok(AlignmentTables::from_parts(
        moon_deities,
        weekday_deities,
        season_rulers,
        raw.festivals,
        raw.zodiac,
        events,
        raw.retrogrades,
    ))
}

fn validate_moon_deities(
    entries: BTreeMap<String, String>,
) -> TableResult<BTreeMap<String, String>> {
    if entries.is_empty() {
        return Err(TableError::EmptyTable("moon_deities"));
    }
    let mut normalized = BTreeMap::new();
    for (name, deity) in entries {
        let key = normalize_moon_name(&name);
        if key.is_empty() || deity.trim().is_empty() {
            return Err(TableError::EmptyName("moon_deities"));
        }
        normalized.insert(key, deity);
    }
    Ok(normalized)
}

fn validate_weekdays(entries: BTreeMap<String, String>) -> TableResult<BTreeMap<String, String>> {
    if entries.is_empty() {
        return Err(TableError::EmptyTable("weekday_deities"));
    }
    for day in entries.keys() {
        if !WEEKDAYS.contains(&day.as_str()) {
            return Err(TableError::UnknownWeekday(day.clone()));
        }
    }
    Ok(entries)
}

fn validate_season_rulers(entries: BTreeMap<String, SeasonRuler>) -> TableResult<[SeasonRuler; 4]> {
    let mut slots: [Option<SeasonRuler>; 4] = Default::default();
    for (name, ruler) in entries {
        let season = Season::ALL
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| TableError::UnknownSeason(name.clone()))?;
        if ruler.deity.trim().is_empty() {
            return Err(TableError::EmptyName("season_rulers"));
        }
        slots[season_index(season)] = Some(ruler);
    }

    let [spring, summer, autumn, winter] = slots;
    Ok([
        spring.ok_or(TableError::MissingSeasonRuler(Season::Spring))?,
        summer.ok_or(TableError::MissingSeasonRuler(Season::Summer))?,
        autumn.ok_or(TableError::MissingSeasonRuler(Season::Autumn))?,
        winter.ok_or(TableError::MissingSeasonRuler(Season::Winter))?,
    ])
}

fn validate_festivals(hemisphere: Hemisphere, entries: &[FestivalEntry]) -> TableResult<()> {
    if entries.is_empty() {
        return Err(TableError::EmptyFestivalList(hemisphere));
    }
    let mut seen = BTreeSet::new();
    for festival in entries {
        if festival.name.trim().is_empty() {
            return Err(TableError::EmptyName("festivals"));
        }
        if !seen.insert(festival.date) {
            return Err(TableError::DuplicateFestivalDate {
                hemisphere,
                date: festival.date,
            });
        }
    }
    Ok(())
}

fn validate_zodiac(entries: &[ZodiacEntry]) -> TableResult<()> {
    if entries.is_empty() {
        return Err(TableError::EmptyTable("zodiac"));
    }
    for entry in entries {
        if entry.sign.trim().is_empty() {
            return Err(TableError::EmptyName("zodiac"));
        }
        let range = entry.range;
        let valid = (1..=12).contains(&range.start_month)
            && (1..=12).contains(&range.end_month)
            && (1..=31).contains(&range.start_day)
            && (1..=31).contains(&range.end_day);
        if !valid {
            return Err(TableError::InvalidZodiacRange {
                sign: entry.sign.clone(),
                range: range.into(),
            });
        }
    }
    Ok(())
}

fn validate_events(table: &'static str, entries: &[DatedEvent]) -> TableResult<()> {
    if entries.iter().any(|event| event.name.trim().is_empty()) {
        return Err(TableError::EmptyName(table));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_season_rulers;
    use crate::model::entry::SeasonRuler;
    use crate::model::season::Season;
    use crate::tables::TableError;
    use std::collections::BTreeMap;

    fn ruler(deity: &str) -> SeasonRuler {
        SeasonRuler {
            deity: deity.to_string(),
            element: "Air".to_string(),
        }
    }

    #[test]
    fn season_rulers_accept_case_insensitive_keys() {
        let mut rulers = BTreeMap::new();
        rulers.insert("spring".to_string(), ruler("Zeus"));
        rulers.insert("SUMMER".to_string(), ruler("Hera"));
        rulers.insert("Autumn".to_string(), ruler("Selene"));
        rulers.insert("Winter".to_string(), ruler("Demeter"));

        let slots = validate_season_rulers(rulers).expect("all seasons present");
        assert_eq!(slots[0].deity, "Zeus");
        assert_eq!(slots[3].deity, "Demeter");
    }

    #[test]
    fn season_rulers_report_first_missing_season() {
        let mut rulers = BTreeMap::new();
        rulers.insert("Spring".to_string(), ruler("Zeus"));
        rulers.insert("Summer".to_string(), ruler("Hera"));
        rulers.insert("Winter".to_string(), ruler("Demeter"));

        let err = validate_season_rulers(rulers).unwrap_err();
        assert!(matches!(err, TableError::MissingSeasonRuler(Season::Autumn)));
    }

    #[test]
    fn season_rulers_reject_unknown_keys() {
        let mut rulers = BTreeMap::new();
        rulers.insert("Monsoon".to_string(), ruler("Indra"));

        let err = validate_season_rulers(rulers).unwrap_err();
        assert!(matches!(err, TableError::UnknownSeason(value) if value == "Monsoon"));
    }
}

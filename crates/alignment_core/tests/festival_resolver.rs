mod common;

use alignment_core::resolve::festival::next_festival;
use alignment_core::{AlignmentTables, Hemisphere};
use common::{date, fixture_tables};

#[test]
fn picks_smallest_upcoming_date_regardless_of_list_order() {
    let tables = fixture_tables();
    let upcoming = next_festival(tables.festivals(Hemisphere::Northern), date(2025, 1, 15))
        .expect("festival list is not empty");

    assert_eq!(upcoming.festival.name, "Imbolc");
    assert_eq!(upcoming.days_remaining, 18);
}

#[test]
fn festival_day_itself_counts_with_zero_days_remaining() {
    let tables = fixture_tables();
    let upcoming = next_festival(tables.festivals(Hemisphere::Northern), date(2025, 5, 1))
        .expect("festival list is not empty");

    assert_eq!(upcoming.festival.name, "Beltane");
    assert_eq!(upcoming.days_remaining, 0);
}

#[test]
fn exhausted_list_wraps_to_first_entry_without_rolling_the_year() {
    let tables = fixture_tables();
    let upcoming = next_festival(tables.festivals(Hemisphere::Northern), date(2025, 6, 1))
        .expect("festival list is not empty");

    assert_eq!(upcoming.festival.name, "Beltane");
    assert_eq!(upcoming.festival.date, date(2025, 5, 1));
    assert_eq!(upcoming.days_remaining, -31);
}

#[test]
fn builtin_southern_list_uses_its_own_calendar() {
    let tables = AlignmentTables::builtin().expect("builtin tables load");
    let upcoming = next_festival(tables.festivals(Hemisphere::Southern), date(2025, 3, 21))
        .expect("festival list is not empty");

    assert_eq!(upcoming.festival.name, "Samhain");
    assert_eq!(upcoming.days_remaining, 40);
}

#[test]
fn selection_is_monotonic_until_exhausted_then_wraps() {
    let tables = AlignmentTables::builtin().expect("builtin tables load");
    let festivals = tables.festivals(Hemisphere::Northern);
    let last_date = festivals
        .iter()
        .map(|festival| festival.date)
        .max()
        .expect("non-empty list");

    let mut previous = None;
    let mut day = date(2025, 1, 1);
    while day <= last_date {
        let upcoming = next_festival(festivals, day).expect("non-empty list");
        assert!(upcoming.festival.date >= day);
        assert!(upcoming.days_remaining >= 0);
        if let Some(previous) = previous {
            assert!(upcoming.festival.date >= previous, "regressed on {day}");
        }
        previous = Some(upcoming.festival.date);
        day = day.succ_opt().expect("date in range");
    }

    let wrapped = next_festival(festivals, last_date.succ_opt().expect("date in range"))
        .expect("non-empty list");
    assert_eq!(wrapped.festival, festivals[0]);
    assert!(wrapped.days_remaining < 0);
}

#[test]
fn builtin_wrap_after_yule_counts_back_to_imbolc() {
    let tables = AlignmentTables::builtin().expect("builtin tables load");
    let upcoming = next_festival(tables.festivals(Hemisphere::Northern), date(2025, 12, 22))
        .expect("festival list is not empty");

    assert_eq!(upcoming.festival.name, "Imbolc");
    assert_eq!(upcoming.days_remaining, -323);
}

//! Next-festival selection.
//!
//! # Invariants
//! - The earliest festival on or after the query date wins.
//! - When every festival has passed, the first configured entry is returned;
//!   dates are not rolled into the following year.

use crate::model::entry::FestivalEntry;
use crate::model::result::UpcomingFestival;
use chrono::NaiveDate;

/// Picks the upcoming festival from a hemisphere list.
///
/// Returns `None` only for an empty list.
pub fn next_festival(festivals: &[FestivalEntry], today: NaiveDate) -> Option<UpcomingFestival> {
    let festival = festivals
        .iter()
        .filter(|festival| festival.date >= today)
        .min_by_key(|festival| festival.date)
        .or_else(|| festivals.first())?;

    Some(UpcomingFestival {
        festival: festival.clone(),
        days_remaining: days_until(today, festival.date),
    })
}

/// Whole days from `today` to `target`; negative when `target` is earlier.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::{days_until, next_festival};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn days_until_is_signed() {
        assert_eq!(days_until(date(2025, 3, 18), date(2025, 3, 20)), 2);
        assert_eq!(days_until(date(2025, 3, 20), date(2025, 3, 20)), 0);
        assert_eq!(days_until(date(2025, 12, 31), date(2025, 2, 2)), -332);
    }

    #[test]
    fn empty_list_has_no_festival() {
        assert!(next_festival(&[], date(2025, 1, 1)).is_none());
    }
}

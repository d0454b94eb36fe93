//! Static table entry shapes.
//!
//! # Invariants
//! - Entries are immutable configuration; resolvers only read them.
//! - Retrograde intervals are closed: both bounds count as active.
//! - Zodiac ranges are `[month_a, day_a, month_b, day_b]` on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One seasonal festival in a hemisphere-keyed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalEntry {
    pub name: String,
    /// ISO calendar date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub deity: String,
    pub element: String,
}

/// Split month/day range used by zodiac signs.
///
/// Matches the tail of `start_month` from `start_day` on, or the head of
/// `end_month` up to and including `end_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct MonthDayRange {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl MonthDayRange {
    pub fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

impl From<[u32; 4]> for MonthDayRange {
    fn from(value: [u32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<MonthDayRange> for [u32; 4] {
    fn from(value: MonthDayRange) -> Self {
        [
            value.start_month,
            value.start_day,
            value.end_month,
            value.end_day,
        ]
    }
}

/// Zodiac sign with its ruling deity and date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacEntry {
    pub sign: String,
    pub deity: String,
    pub range: MonthDayRange,
}

/// Single-day sky event (eclipse, meteor-shower peak, alignment, dark moon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedEvent {
    pub name: String,
    pub date: NaiveDate,
}

/// Planet retrograde window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrogradeEntry {
    pub planet: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RetrogradeEntry {
    /// Returns whether `date` lies within `[start, end]`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Deity and element ruling one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRuler {
    pub deity: String,
    pub element: String,
}

impl SeasonRuler {
    /// Display form, e.g. `Zeus (Air)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.deity, self.element)
    }
}

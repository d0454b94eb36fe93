//! Month/day to zodiac sign.

use crate::model::entry::ZodiacEntry;
use crate::model::result::ZodiacMatch;

/// Resolves the zodiac sign for a month and day.
///
/// Entries are scanned in table order and the last matching entry wins, so
/// overlapping ranges resolve to the later entry. No match yields the
/// unknown sentinel.
pub fn zodiac_for(entries: &[ZodiacEntry], month: u32, day: u32) -> ZodiacMatch {
    entries
        .iter()
        .rev()
        .find(|entry| entry.range.contains(month, day))
        .map(|entry| ZodiacMatch {
            sign: entry.sign.clone(),
            deity: entry.deity.clone(),
        })
        .unwrap_or_else(ZodiacMatch::unknown)
}

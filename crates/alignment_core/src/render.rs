//! Display slots for an alignment result.
//!
//! # Invariants
//! - Slot identifiers are stable; UI layers key their placeholders on them.
//! - Empty event lists render as [`NONE_INDICATOR`], never blank text.

use crate::model::result::AlignmentResult;
use serde::Serialize;

/// Text shown when a list slot has no entries.
pub const NONE_INDICATOR: &str = "None";

/// Text shown in the moon-phase slot when the feed failed.
pub const FEED_UNAVAILABLE: &str = "Unable to fetch moon data";

/// One rendered slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub slot: &'static str,
    pub text: String,
}

impl DisplayLine {
    fn new(slot: &'static str, text: impl Into<String>) -> Self {
        Self {
            slot,
            text: text.into(),
        }
    }
}

/// Renders every slot in page order.
pub fn render_lines(result: &AlignmentResult) -> Vec<DisplayLine> {
    let (festival_text, festival_god_text) = match &result.next_festival {
        Some(upcoming) => (
            format!(
                "{} on {} ({} days away)",
                upcoming.festival.name, upcoming.festival.date, upcoming.days_remaining
            ),
            format!("{} ({})", upcoming.festival.deity, upcoming.festival.element),
        ),
        None => (NONE_INDICATOR.to_string(), NONE_INDICATOR.to_string()),
    };

    let retrogrades = result
        .active_retrogrades
        .iter()
        .map(|entry| format!("{} ({} to {})", entry.planet, entry.start, entry.end))
        .collect::<Vec<_>>();

    vec![
        DisplayLine::new("moon-phase", result.moon_phase.clone()),
        DisplayLine::new("daily-gods", result.ruling_deities.clone()),
        DisplayLine::new(
            "lunar-god",
            format!("{} ({})", result.moon_name, result.lunar_deity),
        ),
        DisplayLine::new(
            "moon-triad",
            format!(
                "{} ({})",
                result.moon_triad.patron(),
                result.moon_triad.label()
            ),
        ),
        DisplayLine::new(
            "current-season",
            format!(
                "Season of {} ruled by {}",
                result.season, result.season_ruler
            ),
        ),
        DisplayLine::new("next-festival", festival_text),
        DisplayLine::new("festival-god", festival_god_text),
        DisplayLine::new("zodiac-sign", result.zodiac.sign.clone()),
        DisplayLine::new("zodiac-god", result.zodiac.deity.clone()),
        DisplayLine::new("rare-events", join_or_none(&result.rare_events)),
        DisplayLine::new("retrogrades", join_or_none(&retrogrades)),
    ]
}

/// Replaces the moon-phase slot text after a feed failure.
pub fn mark_feed_unavailable(lines: &mut [DisplayLine]) {
    if let Some(line) = lines.iter_mut().find(|line| line.slot == "moon-phase") {
        line.text = FEED_UNAVAILABLE.to_string();
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_INDICATOR.to_string()
    } else {
        items.join("; ")
    }
}

//! Month + hemisphere to season.

use crate::model::query::Hemisphere;
use crate::model::season::Season;

/// Returns the season for a 1-based month.
///
/// Months fall into bands `[3,6)`, `[6,9)`, `[9,12)` and everything else.
/// Northern bands read spring, summer, autumn, winter; southern bands are
/// shifted by six months.
pub fn season_for(month: u32, hemisphere: Hemisphere) -> Season {
    let northern = match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    };
    match hemisphere {
        Hemisphere::Northern => northern,
        Hemisphere::Southern => northern.opposite(),
    }
}

#[cfg(test)]
mod tests {
    use super::season_for;
    use crate::model::query::Hemisphere;
    use crate::model::season::Season;

    #[test]
    fn band_edges_switch_season() {
        assert_eq!(season_for(2, Hemisphere::Northern), Season::Winter);
        assert_eq!(season_for(3, Hemisphere::Northern), Season::Spring);
        assert_eq!(season_for(11, Hemisphere::Northern), Season::Autumn);
        assert_eq!(season_for(12, Hemisphere::Northern), Season::Winter);
    }

    #[test]
    fn out_of_range_month_lands_in_last_band() {
        assert_eq!(season_for(0, Hemisphere::Northern), Season::Winter);
        assert_eq!(season_for(13, Hemisphere::Southern), Season::Summer);
    }
}

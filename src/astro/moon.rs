use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_2;
/// Offset aligning the civil day count with a known new moon.
pub const JULIAN_DAY_OFFSET: f64 = 694_039.09;

/// One of the eight conventional lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Position in the cycle, `0` (new) through `7` (waning crescent).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoonPhase::New => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::Full => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    /// Stable lowercase identifier, also indexed by the fuzzy search.
    pub fn key(self) -> &'static str {
        match self {
            MoonPhase::New => "new_moon",
            MoonPhase::WaxingCrescent => "waxing_crescent",
            MoonPhase::FirstQuarter => "first_quarter",
            MoonPhase::WaxingGibbous => "waxing_gibbous",
            MoonPhase::Full => "full_moon",
            MoonPhase::WaningGibbous => "waning_gibbous",
            MoonPhase::LastQuarter => "last_quarter",
            MoonPhase::WaningCrescent => "waning_crescent",
        }
    }
}

/// Approximates the moon phase for a civil date.
///
/// January and February count as months 13 and 14 of the previous year. The
/// fractional part of the elapsed synodic cycles is rounded into one of eight
/// buckets, so each label is centred on its canonical phase point.
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    let day = date.day() as f64;

    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }

    let elapsed_days = 365.25 * year + 30.6 * month + day - JULIAN_DAY_OFFSET;
    let cycles = elapsed_days / SYNODIC_MONTH_DAYS;
    let fraction = cycles - cycles.floor();

    let index = (fraction * 8.0).round() as usize % 8;
    MoonPhase::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn known_full_and_new_moons() {
        // 2024-01-11 new moon, 2024-01-25 full moon.
        assert_eq!(moon_phase(date(2024, 1, 11)), MoonPhase::New);
        assert_eq!(moon_phase(date(2024, 1, 25)), MoonPhase::Full);
    }

    #[test]
    fn index_stays_in_range_for_old_and_new_dates() {
        let mut day = date(1, 1, 1);
        while day < date(3000, 1, 1) {
            let phase = moon_phase(day);
            assert!(phase.index() <= 7);
            day += Duration::days(9_973);
        }
    }

    #[test]
    fn deterministic() {
        let d = date(1982, 3, 12);
        assert_eq!(moon_phase(d), moon_phase(d));
    }

    #[test]
    fn phases_advance_through_a_cycle() {
        let start = date(2024, 1, 11);
        let seen: std::collections::HashSet<_> = (0..30)
            .map(|offset| moon_phase(start + Duration::days(offset)))
            .collect();
        assert_eq!(seen.len(), 8);
    }
}

//! Anniversary arithmetic shared by the builder, the statistics, and the CLI.
//!
//! A Feb 29 date is celebrated on Feb 28 in non-leap years. Age, next
//! occurrence, countdown, and cycle progress all go through [`anniversary_in`]
//! so the policy holds everywhere.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// The anniversary of `date` in `year`, collapsing Feb 29 onto Feb 28.
pub fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// First anniversary of `date` on or after `today`.
pub fn next_occurrence(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(date, today.year());
    if this_year < today {
        anniversary_in(date, today.year() + 1)
    } else {
        this_year
    }
}

/// Whole days from `today` until the next anniversary; zero on the day itself.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (next_occurrence(date, today) - today).num_days();
    days.max(0) as u32
}

/// Completed years between `date` and `today`. Dates in the future count as zero.
pub fn age_on(date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date.year();
    if today < anniversary_in(date, today.year()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Completed calendar months between `date` and `today`.
pub fn months_between(date: NaiveDate, today: NaiveDate) -> u32 {
    let mut months = (today.year() - date.year()) * 12 + today.month() as i32 - date.month() as i32;
    if today.day() < date.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// Share of the current anniversary cycle already elapsed, in `0.0..=100.0`.
///
/// The cycle runs from the previous anniversary to the next one, so the day
/// of the anniversary itself reports a full cycle.
pub fn progress_percent(date: NaiveDate, today: NaiveDate) -> f64 {
    let next = next_occurrence(date, today);
    let previous = anniversary_in(date, next.year() - 1);
    let cycle = (next - previous).num_days();
    if cycle <= 0 {
        return 0.0;
    }
    let elapsed = (today - previous).num_days();
    (elapsed as f64 / cycle as f64 * 100.0).clamp(0.0, 100.0)
}

/// Date six months after `date`, clamped to the end of shorter months.
pub fn half_birthday(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(6)).unwrap_or(date)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };
}

/// Time left from `now` until midnight starting the next anniversary.
///
/// Returns [`Countdown::ZERO`] while the anniversary day is in progress.
pub fn countdown(date: NaiveDate, now: NaiveDateTime) -> Countdown {
    let target = next_occurrence(date, now.date()).and_time(NaiveTime::MIN);
    let remaining = (target - now).num_seconds();
    if remaining <= 0 {
        return Countdown::ZERO;
    }
    Countdown {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ada_example() {
        let birth = date(1990, 3, 12);
        let today = date(2024, 3, 1);
        assert_eq!(age_on(birth, today), 33);
        assert_eq!(next_occurrence(birth, today), date(2024, 3, 12));
        assert_eq!(days_until(birth, today), 11);
    }

    #[test]
    fn leap_day_falls_back_to_feb_28() {
        let birth = date(2000, 2, 29);
        assert_eq!(anniversary_in(birth, 2023), date(2023, 2, 28));
        assert_eq!(anniversary_in(birth, 2024), date(2024, 2, 29));

        let today = date(2023, 2, 1);
        assert_eq!(next_occurrence(birth, today), date(2023, 2, 28));
        assert_eq!(days_until(birth, today), 27);
        assert_eq!(age_on(birth, today), 22);
        assert_eq!(age_on(birth, date(2023, 2, 28)), 23);
        assert_eq!(age_on(birth, date(2024, 2, 28)), 23);
        assert_eq!(age_on(birth, date(2024, 2, 29)), 24);
    }

    #[test]
    fn anniversary_today_is_zero_days_and_full_cycle() {
        let birth = date(1990, 3, 12);
        let today = date(2024, 3, 12);
        assert_eq!(days_until(birth, today), 0);
        assert_eq!(age_on(birth, today), 34);
        assert_eq!(progress_percent(birth, today), 100.0);
    }

    #[test]
    fn passed_anniversary_rolls_into_next_year() {
        let birth = date(1990, 3, 12);
        let today = date(2024, 3, 13);
        assert_eq!(next_occurrence(birth, today), date(2025, 3, 12));
        assert_eq!(days_until(birth, today), 364);
        let progress = progress_percent(birth, today);
        assert!(progress > 0.0 && progress < 1.0, "{progress}");
    }

    #[test]
    fn months_between_respects_day_of_month() {
        assert_eq!(months_between(date(1990, 3, 12), date(1990, 4, 11)), 0);
        assert_eq!(months_between(date(1990, 3, 12), date(1990, 4, 12)), 1);
        assert_eq!(months_between(date(1990, 3, 12), date(2024, 3, 1)), 407);
    }

    #[test]
    fn half_birthday_clamps_to_month_end() {
        assert_eq!(half_birthday(date(1990, 8, 31)), date(1991, 2, 28));
        assert_eq!(half_birthday(date(1990, 3, 12)), date(1990, 9, 12));
    }

    #[test]
    fn countdown_splits_remaining_time() {
        let birth = date(1990, 3, 12);
        let now = date(2024, 3, 10).and_hms_opt(22, 30, 15).unwrap();
        assert_eq!(
            countdown(birth, now),
            Countdown {
                days: 1,
                hours: 1,
                minutes: 29,
                seconds: 45
            }
        );
        let during = date(2024, 3, 12).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(countdown(birth, during), Countdown::ZERO);
    }

    #[test]
    fn future_dates_have_zero_age() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }
}

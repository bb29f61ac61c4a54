//! "Fun facts" derived from a date of birth and the current day.

use std::f64::consts::PI;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::astro::{moon_phase, MoonPhase};
use crate::roster::DATE_FORMAT;

use super::calendar;

pub const HEART_RATE_BPM: u64 = 80;
pub const BREATH_RATE_BPM: u64 = 16;
pub const ORBITAL_KM_PER_DAY: u64 = 2_570_000;
pub const MINUTES_PER_DAY: u64 = 24 * 60;

/// Number of entries in the daily insight catalog.
pub const INSIGHT_COUNT: usize = 15;

pub const PHYSICAL_PERIOD_DAYS: f64 = 23.0;
pub const EMOTIONAL_PERIOD_DAYS: f64 = 28.0;
pub const INTELLECTUAL_PERIOD_DAYS: f64 = 33.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    /// Sidereal orbital period in Earth days.
    pub fn orbit_days(self) -> f64 {
        match self {
            Planet::Mercury => 87.97,
            Planet::Venus => 224.7,
            Planet::Mars => 686.97,
            Planet::Jupiter => 4_332.59,
            Planet::Saturn => 10_759.22,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Planet::Mercury => "☿️",
            Planet::Venus => "♀️",
            Planet::Mars => "♂️",
            Planet::Jupiter => "♃",
            Planet::Saturn => "🪐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetAge {
    pub planet: Planet,
    pub years: f64,
}

/// Numerology life path: a single digit or one of the master numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifePath {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Eleven,
    TwentyTwo,
    ThirtyThree,
}

impl LifePath {
    pub fn number(self) -> u32 {
        match self {
            LifePath::One => 1,
            LifePath::Two => 2,
            LifePath::Three => 3,
            LifePath::Four => 4,
            LifePath::Five => 5,
            LifePath::Six => 6,
            LifePath::Seven => 7,
            LifePath::Eight => 8,
            LifePath::Nine => 9,
            LifePath::Eleven => 11,
            LifePath::TwentyTwo => 22,
            LifePath::ThirtyThree => 33,
        }
    }

    fn from_reduced(value: u32) -> Option<Self> {
        Some(match value {
            1 => LifePath::One,
            2 => LifePath::Two,
            3 => LifePath::Three,
            4 => LifePath::Four,
            5 => LifePath::Five,
            6 => LifePath::Six,
            7 => LifePath::Seven,
            8 => LifePath::Eight,
            9 => LifePath::Nine,
            11 => LifePath::Eleven,
            22 => LifePath::TwentyTwo,
            33 => LifePath::ThirtyThree,
            _ => return None,
        })
    }
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Reduces the digits of `YYYYMMDD` until a single digit or a master number remains.
pub fn life_path(date: NaiveDate) -> LifePath {
    let mut value =
        digit_sum(date.year().unsigned_abs()) + digit_sum(date.month()) + digit_sum(date.day());
    while value > 9 && !matches!(value, 11 | 22 | 33) {
        value = digit_sum(value);
    }
    // Every date has a non-zero digit, so `value` lands in 1..=9 or a master number.
    LifePath::from_reduced(value).unwrap_or(LifePath::One)
}

/// Java-style string hash (`h = h * 31 + unit`) over UTF-16 code units, wrapping at 32 bits.
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Stable per-day bucket in `0..INSIGHT_COUNT` for a name.
pub fn daily_insight(name: &str, today: NaiveDate) -> usize {
    let seed = format!("{}{}", name, today.format(DATE_FORMAT));
    (string_hash(&seed) % INSIGHT_COUNT as i32).unsigned_abs() as usize
}

/// Biorhythm cycle values in `-100.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Biorhythm {
    pub day: NaiveDate,
    pub physical: f64,
    pub emotional: f64,
    pub intellectual: f64,
}

fn cycle_value(days_lived: i64, period: f64) -> f64 {
    (2.0 * PI * days_lived as f64 / period).sin() * 100.0
}

pub fn biorhythm(birth: NaiveDate, day: NaiveDate) -> Biorhythm {
    let days_lived = (day - birth).num_days();
    Biorhythm {
        day,
        physical: cycle_value(days_lived, PHYSICAL_PERIOD_DAYS),
        emotional: cycle_value(days_lived, EMOTIONAL_PERIOD_DAYS),
        intellectual: cycle_value(days_lived, INTELLECTUAL_PERIOD_DAYS),
    }
}

/// Consecutive daily biorhythms starting at `start`.
pub fn biorhythm_series(birth: NaiveDate, start: NaiveDate, days: usize) -> Vec<Biorhythm> {
    (0..days as i64)
        .map(|offset| biorhythm(birth, start + Duration::days(offset)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeFacts {
    pub age_in_days: u64,
    pub age_in_weeks: u64,
    pub age_in_months: u32,
    pub heartbeats: u64,
    pub breaths: u64,
    pub distance_km: u64,
    pub planet_ages: Vec<PlanetAge>,
    pub birth_moon: MoonPhase,
    pub life_path: LifePath,
    pub daily_insight: usize,
    pub half_birthday: NaiveDate,
    pub next_weekday: Weekday,
    pub biorhythm: Biorhythm,
}

impl LifeFacts {
    pub fn compute(name: &str, birth: NaiveDate, today: NaiveDate) -> Self {
        let days = (today - birth).num_days().max(0) as u64;
        let minutes = days * MINUTES_PER_DAY;
        let planet_ages = Planet::ALL
            .iter()
            .map(|planet| PlanetAge {
                planet: *planet,
                years: days as f64 / planet.orbit_days(),
            })
            .collect();

        Self {
            age_in_days: days,
            age_in_weeks: days / 7,
            age_in_months: calendar::months_between(birth, today),
            heartbeats: minutes * HEART_RATE_BPM,
            breaths: minutes * BREATH_RATE_BPM,
            distance_km: days * ORBITAL_KM_PER_DAY,
            planet_ages,
            birth_moon: moon_phase(birth),
            life_path: life_path(birth),
            daily_insight: daily_insight(name, today),
            half_birthday: calendar::half_birthday(birth),
            next_weekday: calendar::next_occurrence(birth, today).weekday(),
            biorhythm: biorhythm(birth, today),
        }
    }
}

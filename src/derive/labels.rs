use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Greatest,
    Silent,
    Boomers,
    GenX,
    Millennials,
    GenZ,
    GenAlpha,
}

impl Generation {
    pub fn from_year(year: i32) -> Self {
        match year {
            y if y >= 2013 => Generation::GenAlpha,
            y if y >= 1997 => Generation::GenZ,
            y if y >= 1981 => Generation::Millennials,
            y if y >= 1965 => Generation::GenX,
            y if y >= 1946 => Generation::Boomers,
            y if y >= 1928 => Generation::Silent,
            _ => Generation::Greatest,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Generation::Greatest => "greatest",
            Generation::Silent => "silent",
            Generation::Boomers => "boomers",
            Generation::GenX => "gen_x",
            Generation::Millennials => "millennials",
            Generation::GenZ => "gen_z",
            Generation::GenAlpha => "gen_alpha",
        }
    }
}

/// Meteorological season, northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_date(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Baby,
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=2 => AgeGroup::Baby,
            3..=12 => AgeGroup::Child,
            13..=19 => AgeGroup::Teen,
            20..=59 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AgeGroup::Baby => "baby",
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

/// `"1980s"` style label for the decade containing `year`.
pub fn decade_label(year: i32) -> String {
    format!("{}s", year - year.rem_euclid(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_boundaries() {
        assert_eq!(Generation::from_year(2013), Generation::GenAlpha);
        assert_eq!(Generation::from_year(2012), Generation::GenZ);
        assert_eq!(Generation::from_year(1997), Generation::GenZ);
        assert_eq!(Generation::from_year(1996), Generation::Millennials);
        assert_eq!(Generation::from_year(1965), Generation::GenX);
        assert_eq!(Generation::from_year(1946), Generation::Boomers);
        assert_eq!(Generation::from_year(1945), Generation::Silent);
        assert_eq!(Generation::from_year(1927), Generation::Greatest);
    }

    #[test]
    fn seasons_follow_meteorological_months() {
        let season = |m| Season::from_date(NaiveDate::from_ymd_opt(2024, m, 1).unwrap());
        assert_eq!(season(12), Season::Winter);
        assert_eq!(season(2), Season::Winter);
        assert_eq!(season(3), Season::Spring);
        assert_eq!(season(8), Season::Summer);
        assert_eq!(season(11), Season::Autumn);
    }

    #[test]
    fn age_groups_and_decades() {
        assert_eq!(AgeGroup::from_age(2), AgeGroup::Baby);
        assert_eq!(AgeGroup::from_age(3), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(13), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(20), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Senior);
        assert_eq!(decade_label(1982), "1980s");
        assert_eq!(decade_label(2000), "2000s");
    }
}

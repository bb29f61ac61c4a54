//! Derived-record builder: turns raw roster entries into display records for a given day.

pub mod calendar;
pub mod facts;
pub mod labels;
pub mod milestone;

use chrono::NaiveDate;
use serde::Serialize;

use crate::astro::{
    birthstone, chinese_zodiac, compatibility::Astrological, zodiac_sign, Birthstone,
    ChineseZodiac, Element, ZodiacSign,
};
use crate::errors::Result;
use crate::roster::{self, Category, RawBirthRecord, RecordKey};
use crate::time::Clock;

pub use facts::{Biorhythm, LifeFacts, LifePath, Planet, PlanetAge};
pub use labels::{AgeGroup, Generation, Season};
pub use milestone::{Milestone, MilestoneStatus, WeddingMaterial};

/// A roster entry with every display field computed for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedBirthday {
    pub name: String,
    pub date: NaiveDate,
    pub category: Category,
    pub age: u32,
    /// Age (or years married) once the next occurrence is reached.
    pub upcoming_age: u32,
    pub next_occurrence: NaiveDate,
    pub days_until: u32,
    pub progress_percent: f64,
    pub zodiac: ZodiacSign,
    pub element: Element,
    pub birthstone: Birthstone,
    pub chinese_zodiac: ChineseZodiac,
    pub generation: Generation,
    pub season: Season,
    pub decade: String,
    pub age_group: AgeGroup,
    pub milestone: Option<Milestone>,
    pub facts: LifeFacts,
}

impl DerivedBirthday {
    /// Computes every derived field of `record` as seen on `today`.
    pub fn derive(record: &RawBirthRecord, today: NaiveDate) -> Self {
        let date = record.date;
        let age = calendar::age_on(date, today);
        let next_occurrence = calendar::next_occurrence(date, today);
        let days_until = calendar::days_until(date, today);
        let upcoming_age = if days_until == 0 { age } else { age + 1 };
        let zodiac = zodiac_sign(date);

        Self {
            name: record.name.clone(),
            date,
            category: record.category,
            age,
            upcoming_age,
            next_occurrence,
            days_until,
            progress_percent: calendar::progress_percent(date, today),
            zodiac,
            element: zodiac.element(),
            birthstone: birthstone(date),
            chinese_zodiac: chinese_zodiac(chrono::Datelike::year(&date)),
            generation: Generation::from_year(chrono::Datelike::year(&date)),
            season: Season::from_date(date),
            decade: labels::decade_label(chrono::Datelike::year(&date)),
            age_group: AgeGroup::from_age(age),
            milestone: milestone::detect(record.category, age, upcoming_age),
            facts: LifeFacts::compute(&record.name, date, today),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            date: self.date,
        }
    }

    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

impl Astrological for DerivedBirthday {
    fn name(&self) -> &str {
        &self.name
    }

    fn element(&self) -> Element {
        self.element
    }
}

/// Validates the roster and derives every record for `today`.
///
/// Invalid entries fail the whole build; callers treat that as fatal.
pub fn build(records: &[RawBirthRecord], today: NaiveDate) -> Result<Vec<DerivedBirthday>> {
    roster::validate(records)?;
    let derived: Vec<DerivedBirthday> = records
        .iter()
        .map(|record| DerivedBirthday::derive(record, today))
        .collect();
    tracing::debug!(
        count = derived.len(),
        today = %today,
        milestones = derived.iter().filter(|r| r.milestone.is_some()).count(),
        "derived records built"
    );
    Ok(derived)
}

/// [`build`] using the clock's current day.
pub fn build_with_clock(records: &[RawBirthRecord], clock: &dyn Clock) -> Result<Vec<DerivedBirthday>> {
    build(records, clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BirthdayError;
    use crate::time::FixedClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ada_on_first_of_march() {
        let ada = RawBirthRecord::new("Ada", date(1990, 3, 12), Category::Female);
        let derived = build(&[ada], date(2024, 3, 1)).unwrap();
        let ada = &derived[0];
        assert_eq!(ada.age, 33);
        assert_eq!(ada.upcoming_age, 34);
        assert_eq!(ada.next_occurrence, date(2024, 3, 12));
        assert_eq!(ada.days_until, 11);
        assert_eq!(ada.zodiac, ZodiacSign::Pisces);
        assert_eq!(ada.element, Element::Water);
        assert_eq!(ada.birthstone, Birthstone::Aquamarine);
        assert_eq!(ada.chinese_zodiac, ChineseZodiac::Horse);
        assert_eq!(ada.generation, Generation::Millennials);
        assert_eq!(ada.season, Season::Spring);
        assert_eq!(ada.decade, "1990s");
        assert_eq!(ada.age_group, AgeGroup::Adult);
        assert_eq!(ada.milestone, None);
        assert_eq!(ada.facts.daily_insight, 6);
    }

    #[test]
    fn empty_name_is_fatal() {
        let bad = RawBirthRecord::new("", date(1990, 3, 12), Category::Male);
        let err = build(&[bad], date(2024, 3, 1)).unwrap_err();
        assert!(matches!(err, BirthdayError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn build_is_deterministic_for_a_fixed_day() {
        let roster = roster::builtin_roster();
        let clock = FixedClock::on(date(2025, 6, 1));
        let first = build_with_clock(&roster, &clock).unwrap();
        let second = build_with_clock(&roster, &clock).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn anniversary_milestone_uses_wedding_table() {
        let couple = RawBirthRecord::new("A & B", date(1999, 7, 1), Category::Anniversary);
        let derived = DerivedBirthday::derive(&couple, date(2024, 6, 1));
        let milestone = derived.milestone.expect("silver anniversary");
        assert_eq!(milestone.threshold, 25);
        assert_eq!(milestone.material, Some(WeddingMaterial::Silver));
        assert_eq!(milestone.status, MilestoneStatus::Upcoming);
    }
}

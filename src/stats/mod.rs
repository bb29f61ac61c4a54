//! Aggregate views over the derived records: distributions, the age
//! pyramid, roster records and the pairwise compatibility matrix.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::astro::{compatibility, Element, ZodiacSign};
use crate::derive::{AgeGroup, DerivedBirthday, Generation, Season};
use crate::roster::Category;

/// Names sharing one value of a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<K> {
    pub key: K,
    pub names: Vec<String>,
}

impl<K> Bucket<K> {
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

/// Groups `records` by `key_of`, one bucket per entry of `order` (empty ones included).
pub fn distribution<K, F>(records: &[DerivedBirthday], order: &[K], key_of: F) -> Vec<Bucket<K>>
where
    K: Copy + PartialEq,
    F: Fn(&DerivedBirthday) -> K,
{
    order
        .iter()
        .map(|key| Bucket {
            key: *key,
            names: records
                .iter()
                .filter(|record| key_of(record) == *key)
                .map(|record| record.name.clone())
                .collect(),
        })
        .collect()
}

pub fn by_age_group(records: &[DerivedBirthday]) -> Vec<Bucket<AgeGroup>> {
    const ORDER: [AgeGroup; 5] = [
        AgeGroup::Baby,
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];
    distribution(records, &ORDER, |record| record.age_group)
}

pub fn by_generation(records: &[DerivedBirthday]) -> Vec<Bucket<Generation>> {
    const ORDER: [Generation; 7] = [
        Generation::Greatest,
        Generation::Silent,
        Generation::Boomers,
        Generation::GenX,
        Generation::Millennials,
        Generation::GenZ,
        Generation::GenAlpha,
    ];
    distribution(records, &ORDER, |record| record.generation)
}

pub fn by_season(records: &[DerivedBirthday]) -> Vec<Bucket<Season>> {
    const ORDER: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];
    distribution(records, &ORDER, |record| record.season)
}

pub fn by_zodiac(records: &[DerivedBirthday]) -> Vec<Bucket<ZodiacSign>> {
    distribution(records, &ZodiacSign::ALL, |record| record.zodiac)
}

pub fn by_element(records: &[DerivedBirthday]) -> Vec<Bucket<Element>> {
    distribution(records, &Element::ALL, |record| record.element)
}

pub fn by_category(records: &[DerivedBirthday]) -> Vec<Bucket<Category>> {
    distribution(records, &Category::ALL, |record| record.category)
}

/// Birth months `1..=12`.
pub fn by_month(records: &[DerivedBirthday]) -> Vec<Bucket<u32>> {
    let months: Vec<u32> = (1..=12).collect();
    distribution(records, &months, |record| record.date.month())
}

/// Decades present in the roster, oldest first.
pub fn by_decade(records: &[DerivedBirthday]) -> Vec<Bucket<String>> {
    let mut decades: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in records {
        decades
            .entry(record.decade.clone())
            .or_default()
            .push(record.name.clone());
    }
    decades
        .into_iter()
        .map(|(key, names)| Bucket { key, names })
        .collect()
}

/// Ages present among people, youngest first.
pub fn age_histogram(records: &[DerivedBirthday]) -> Vec<Bucket<u32>> {
    let mut ages: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.category.is_person()) {
        ages.entry(record.age).or_default().push(record.name.clone());
    }
    ages.into_iter()
        .map(|(key, names)| Bucket { key, names })
        .collect()
}

/// Births per `[month0][day0]`.
pub fn birth_heatmap(records: &[DerivedBirthday]) -> [[usize; 31]; 12] {
    let mut grid = [[0usize; 31]; 12];
    for record in records {
        grid[record.date.month0() as usize][record.date.day0() as usize] += 1;
    }
    grid
}

pub const PYRAMID_GROUPS: [&str; 10] = [
    "0-9", "10-19", "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80-89", "90+",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PyramidRow {
    pub group: &'static str,
    pub male: Vec<String>,
    pub female: Vec<String>,
}

/// People by ten-year age band; the last band is open-ended.
pub fn age_pyramid(records: &[DerivedBirthday]) -> Vec<PyramidRow> {
    let mut rows: Vec<PyramidRow> = PYRAMID_GROUPS
        .iter()
        .map(|group| PyramidRow {
            group: *group,
            male: Vec::new(),
            female: Vec::new(),
        })
        .collect();
    for record in records {
        let band = (record.age as usize / 10).min(rows.len() - 1);
        match record.category {
            Category::Male => rows[band].male.push(record.name.clone()),
            Category::Female => rows[band].female.push(record.name.clone()),
            Category::Anniversary => {}
        }
    }
    rows
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Socialite {
    pub name: String,
    pub perfect_matches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRecords {
    pub elder: String,
    pub rookie: String,
    pub socialite: Socialite,
    /// Pairs of people sharing a birthday (month and day).
    pub twins: Vec<(String, String)>,
}

/// Oldest, youngest, most perfectly matched person and birthday twins. `None` without people.
pub fn roster_records(records: &[DerivedBirthday]) -> Option<RosterRecords> {
    let people: Vec<&DerivedBirthday> = records.iter().filter(|r| r.category.is_person()).collect();
    let first = people.first()?;

    // Ties: the elder is the first listed, the rookie the last.
    let mut elder = *first;
    let mut rookie = *first;
    for person in &people {
        if person.age > elder.age {
            elder = *person;
        }
        if person.age <= rookie.age {
            rookie = *person;
        }
    }

    let mut socialite = Socialite {
        name: first.name.clone(),
        perfect_matches: 0,
    };
    for (i, person) in people.iter().enumerate() {
        let matches = people
            .iter()
            .filter(|other| other.name != person.name)
            .filter(|other| compatibility(*person, **other) == 100)
            .count();
        if i == 0 || matches > socialite.perfect_matches {
            socialite = Socialite {
                name: person.name.clone(),
                perfect_matches: matches,
            };
        }
    }

    let mut twins = Vec::new();
    for (i, a) in people.iter().enumerate() {
        for b in &people[i + 1..] {
            if a.date.month() == b.date.month() && a.date.day() == b.date.day() {
                twins.push((a.name.clone(), b.name.clone()));
            }
        }
    }

    Some(RosterRecords {
        elder: elder.name.clone(),
        rookie: rookie.name.clone(),
        socialite,
        twins,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityMatrix {
    pub names: Vec<String>,
    /// `scores[i][j]` pairs `names[i]` with `names[j]`.
    pub scores: Vec<Vec<u8>>,
}

/// Pairwise scores between people; anniversaries are left out.
pub fn compatibility_matrix(records: &[DerivedBirthday]) -> CompatibilityMatrix {
    let people: Vec<&DerivedBirthday> = records.iter().filter(|r| r.category.is_person()).collect();
    let scores = people
        .iter()
        .map(|a| people.iter().map(|b| compatibility(*a, *b)).collect())
        .collect();
    CompatibilityMatrix {
        names: people.iter().map(|p| p.name.clone()).collect(),
        scores,
    }
}

/// Soonest upcoming record, first listed on ties.
pub fn next_celebration(records: &[DerivedBirthday]) -> Option<&DerivedBirthday> {
    records.iter().min_by_key(|record| record.days_until)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::build;
    use crate::roster::RawBirthRecord;
    use chrono::NaiveDate;

    fn records() -> Vec<DerivedBirthday> {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        build(
            &[
                // Aries (fire), Leo (fire), Gemini (air), Taurus (earth)
                RawBirthRecord::new("Ann", day(1950, 4, 1), Category::Female),
                RawBirthRecord::new("Ben", day(1990, 8, 1), Category::Male),
                RawBirthRecord::new("Cal", day(2020, 6, 1), Category::Male),
                RawBirthRecord::new("Dot", day(2020, 5, 1), Category::Female),
                RawBirthRecord::new("Eve", day(1995, 8, 1), Category::Female),
                RawBirthRecord::new("Ann & Ben", day(2000, 1, 1), Category::Anniversary),
            ],
            day(2024, 3, 1),
        )
        .unwrap()
    }

    #[test]
    fn distributions_cover_every_key() {
        let records = records();
        let seasons = by_season(&records);
        assert_eq!(seasons.len(), 4);
        assert_eq!(seasons[0].names, vec!["Ann & Ben"]);
        assert_eq!(seasons[2].count(), 3);
        let months = by_month(&records);
        assert_eq!(months[7].names, vec!["Ben", "Eve"]);
        let decades: Vec<String> = by_decade(&records).into_iter().map(|b| b.key).collect();
        assert_eq!(decades, vec!["1950s", "1990s", "2000s", "2020s"]);
    }

    #[test]
    fn pyramid_bands_people_only() {
        let pyramid = age_pyramid(&records());
        assert_eq!(pyramid[0].male, vec!["Cal"]);
        assert_eq!(pyramid[0].female, vec!["Dot"]);
        assert_eq!(pyramid[2].female, vec!["Eve"]);
        assert_eq!(pyramid[3].male, vec!["Ben"]);
        assert_eq!(pyramid[7].female, vec!["Ann"]);
        let total: usize = pyramid.iter().map(|r| r.male.len() + r.female.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn roster_records_pick_extremes_and_twins() {
        let stats = roster_records(&records()).unwrap();
        assert_eq!(stats.elder, "Ann");
        // Cal and Dot are both 3; the later one wins.
        assert_eq!(stats.rookie, "Dot");
        assert_eq!(stats.twins, vec![("Ben".to_string(), "Eve".to_string())]);
        // Cal (air) pairs perfectly with the three fire signs.
        assert_eq!(stats.socialite.name, "Cal");
        assert_eq!(stats.socialite.perfect_matches, 3);
    }

    #[test]
    fn matrix_is_symmetric_with_full_diagonal() {
        let matrix = compatibility_matrix(&records());
        assert_eq!(matrix.names.len(), 5);
        for i in 0..5 {
            assert_eq!(matrix.scores[i][i], 100);
            for j in 0..5 {
                assert_eq!(matrix.scores[i][j], matrix.scores[j][i]);
            }
        }
    }

    #[test]
    fn next_celebration_is_soonest() {
        let records = records();
        assert_eq!(next_celebration(&records).map(|r| r.name.as_str()), Some("Ann"));
        assert!(roster_records(&[]).is_none());
    }
}

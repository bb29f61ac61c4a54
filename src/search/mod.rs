//! Fuzzy, weighted, multi-field search over derived records.

use chrono::Datelike;
use strsim::normalized_levenshtein;

use crate::derive::DerivedBirthday;
use crate::i18n::{self, Locale, Text};
use crate::roster::DATE_FORMAT;

/// Maximum weighted score accepted as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Sign,
    Element,
    Birthstone,
    Date,
    Age,
    ChineseZodiac,
    Month,
    Category,
    Generation,
    Decade,
}

impl SearchField {
    pub const ALL: [SearchField; 11] = [
        SearchField::Name,
        SearchField::Sign,
        SearchField::Element,
        SearchField::Birthstone,
        SearchField::Date,
        SearchField::Age,
        SearchField::ChineseZodiac,
        SearchField::Month,
        SearchField::Category,
        SearchField::Generation,
        SearchField::Decade,
    ];

    /// Relative importance in `(0, 1]`; lower weights need closer matches.
    pub fn weight(self) -> f64 {
        match self {
            SearchField::Name => 1.0,
            SearchField::Sign | SearchField::Month | SearchField::Date => 0.9,
            SearchField::Age | SearchField::Decade => 0.9,
            SearchField::Element
            | SearchField::Birthstone
            | SearchField::ChineseZodiac
            | SearchField::Category
            | SearchField::Generation => 0.8,
        }
    }

    fn value(self, record: &DerivedBirthday, locale: Locale) -> String {
        match self {
            SearchField::Name => record.name.clone(),
            SearchField::Sign => i18n::text(locale, Text::Sign(record.zodiac)).to_string(),
            SearchField::Element => i18n::text(locale, Text::Element(record.element)).to_string(),
            SearchField::Birthstone => i18n::text(locale, Text::Stone(record.birthstone)).to_string(),
            SearchField::Date => record.date.format(DATE_FORMAT).to_string(),
            SearchField::Age => record.age.to_string(),
            SearchField::ChineseZodiac => {
                i18n::text(locale, Text::Chinese(record.chinese_zodiac)).to_string()
            }
            SearchField::Month => i18n::month_name(locale, record.date.month()).to_string(),
            SearchField::Category => i18n::text(locale, Text::Category(record.category)).to_string(),
            SearchField::Generation => {
                i18n::text(locale, Text::Generation(record.generation)).to_string()
            }
            SearchField::Decade => record.decade.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexConfig {
    pub threshold: f64,
    pub locale: Locale,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            locale: Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the record in the indexed slice.
    pub index: usize,
    /// Weighted score, `0.0` is a perfect match.
    pub score: f64,
    pub field: SearchField,
}

/// Lowercased field values for every record, computed once.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<Vec<(SearchField, String)>>,
    config: IndexConfig,
}

impl SearchIndex {
    pub fn new(records: &[DerivedBirthday], config: IndexConfig) -> Self {
        let entries = records
            .iter()
            .map(|record| {
                SearchField::ALL
                    .iter()
                    .map(|field| (*field, field.value(record, config.locale).to_lowercase()))
                    .collect()
            })
            .collect();
        Self { entries, config }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Matches for `query`, best first. A blank query matches every record with score `0.0`.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return (0..self.entries.len())
                .map(|index| SearchHit {
                    index,
                    score: 0.0,
                    field: SearchField::Name,
                })
                .collect();
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, fields)| {
                best_field(&query, fields)
                    .filter(|(_, score)| *score <= self.config.threshold)
                    .map(|(field, score)| SearchHit { index, score, field })
            })
            .collect();
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));
        hits
    }

    /// Indices of matching records in index order.
    pub fn matching_indices(&self, query: &str) -> Vec<usize> {
        let mut indices: Vec<usize> = self.search(query).into_iter().map(|hit| hit.index).collect();
        indices.sort_unstable();
        indices
    }
}

fn best_field(query: &str, fields: &[(SearchField, String)]) -> Option<(SearchField, f64)> {
    fields
        .iter()
        .map(|(field, value)| {
            let weighted = 1.0 - (1.0 - field_score(query, value)) * field.weight();
            (*field, weighted)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// `1 - best similarity` between `query` and the tokens and same-length windows of `value`.
pub fn field_score(query: &str, value: &str) -> f64 {
    if value.contains(query) {
        return 0.0;
    }
    let mut best = normalized_levenshtein(query, value);

    for token in value.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()) {
        best = best.max(normalized_levenshtein(query, token));
    }

    let chars: Vec<char> = value.chars().collect();
    let width = query.chars().count();
    if width > 0 && width < chars.len() {
        for window in chars.windows(width) {
            let window: String = window.iter().collect();
            best = best.max(normalized_levenshtein(query, &window));
        }
    }
    1.0 - best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::build;
    use crate::roster::{Category, RawBirthRecord};
    use chrono::NaiveDate;

    fn records() -> Vec<DerivedBirthday> {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        build(
            &[
                RawBirthRecord::new("Ada", day(1990, 3, 12), Category::Female),
                RawBirthRecord::new("Bob", day(1985, 7, 30), Category::Male),
                RawBirthRecord::new("Brigitte & Julien", day(2016, 2, 19), Category::Anniversary),
            ],
            day(2024, 3, 1),
        )
        .unwrap()
    }

    #[test]
    fn exact_substring_scores_zero() {
        assert_eq!(field_score("ada", "ada"), 0.0);
        assert_eq!(field_score("jul", "brigitte & julien"), 0.0);
    }

    #[test]
    fn typo_within_threshold_still_matches() {
        let index = SearchIndex::new(&records(), IndexConfig::default());
        assert_eq!(index.matching_indices("brigite"), vec![2]);
    }

    #[test]
    fn searches_non_name_fields() {
        let index = SearchIndex::new(&records(), IndexConfig::default());
        // Bob is a Leo born in July 1985.
        assert_eq!(index.matching_indices("leo"), vec![1]);
        assert_eq!(index.matching_indices("peridot"), vec![1]);
        assert_eq!(index.matching_indices("1985"), vec![1]);
    }

    #[test]
    fn localized_index_uses_translated_labels() {
        let config = IndexConfig {
            locale: Locale::Fr,
            ..IndexConfig::default()
        };
        let index = SearchIndex::new(&records(), config);
        assert_eq!(index.matching_indices("juillet"), vec![1]);
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let index = SearchIndex::new(&records(), IndexConfig::default());
        assert!(index.search("zzzzqx").is_empty());
    }

    #[test]
    fn blank_query_matches_everything() {
        let index = SearchIndex::new(&records(), IndexConfig::default());
        assert_eq!(index.matching_indices("   "), vec![0, 1, 2]);
    }
}

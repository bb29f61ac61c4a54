//! Raw roster entries: the static list of birthdays and anniversaries that
//! every derived view is computed from.

mod builtin;

use std::{fmt, fs, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{BirthdayError, Result};

pub use builtin::builtin_roster;

/// Date format used by roster files and record keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Male,
    Female,
    Anniversary,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Male, Category::Female, Category::Anniversary];

    pub fn key(self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Anniversary => "anniversary",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Male => "♂️",
            Category::Female => "♀️",
            Category::Anniversary => "💒",
        }
    }

    /// People celebrate birthdays; anniversaries track a couple.
    pub fn is_person(self) -> bool {
        !matches!(self, Category::Anniversary)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "boy" | "boys" => Some(Category::Male),
            "female" | "f" | "girl" | "girls" => Some(Category::Female),
            "anniversary" | "wedding" | "weddings" | "w" => Some(Category::Anniversary),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One roster line as loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBirthRecord {
    pub name: String,
    pub date: NaiveDate,
    pub category: Category,
}

impl RawBirthRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate, category: Category) -> Self {
        Self {
            name: name.into(),
            date,
            category,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            date: self.date,
        }
    }
}

/// Identity of a record across derived views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format(DATE_FORMAT))
    }
}

/// On-disk shape of a roster entry; the date stays textual until validated.
#[derive(Debug, Clone, Deserialize)]
struct RosterEntry {
    name: String,
    date: String,
    category: Category,
}

/// Rejects entries that would poison every derived view.
pub fn validate(records: &[RawBirthRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(BirthdayError::InvalidRecord {
                index,
                reason: "name must not be empty".into(),
            });
        }
    }
    Ok(())
}

/// Parses a JSON roster (`[{"name", "date": "YYYY-MM-DD", "category"}]`).
pub fn parse_roster(json: &str) -> Result<Vec<RawBirthRecord>> {
    let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let date = NaiveDate::parse_from_str(entry.date.trim(), DATE_FORMAT).map_err(|err| {
            BirthdayError::InvalidRecord {
                index,
                reason: format!("unparseable date `{}`: {}", entry.date, err),
            }
        })?;
        records.push(RawBirthRecord::new(entry.name, date, entry.category));
    }
    validate(&records)?;
    Ok(records)
}

pub fn load_roster(path: &Path) -> Result<Vec<RawBirthRecord>> {
    let data = fs::read_to_string(path)?;
    let records = parse_roster(&data)?;
    tracing::debug!(path = %path.display(), count = records.len(), "roster loaded");
    Ok(records)
}

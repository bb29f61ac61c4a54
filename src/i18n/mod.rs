//! Typed translation keys and per-locale tables.
//!
//! Every locale module matches exhaustively on [`Text`], so adding a key
//! without translating it is a compile error.

mod en;
mod fr;

use std::fmt;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::astro::{Birthstone, ChineseZodiac, Element, MoonPhase, ZodiacSign};
use crate::derive::{
    AgeGroup, Generation, LifePath, Milestone, MilestoneStatus, Planet, Season, WeddingMaterial,
};
use crate::roster::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Language-only matching (`fr-CA` -> `fr`); unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" => Locale::Fr,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Sign(ZodiacSign),
    Element(Element),
    Stone(Birthstone),
    Chinese(ChineseZodiac),
    Moon(MoonPhase),
    Generation(Generation),
    Season(Season),
    AgeGroup(AgeGroup),
    Month(Month),
    Category(Category),
    Wedding(WeddingMaterial),
    LifePath(LifePath),
    Planet(Planet),
    AppTitle,
    Today,
    Tomorrow,
    /// `{days}`
    InDays,
    NoResults,
    ColumnName,
    ColumnDate,
    ColumnAge,
    ColumnCountdown,
    ColumnSign,
    ColumnStone,
    ColumnMilestone,
    /// `{n}`
    MilestoneTurning,
    /// `{n}`
    MilestoneTurned,
    /// `{n}`, `{material}`
    MilestoneAnniversaryUpcoming,
    /// `{n}`, `{material}`
    MilestoneAnniversaryReached,
    NotifyTodayTitle,
    /// `{names}`
    NotifyTodayBody,
    NotifyUpcomingTitle,
    /// `{names}`
    NotifyUpcomingBody,
    /// `{names}`, appended to the today body.
    NotifyBothBody,
    NoEvents,
    NoWeather,
}

/// Looks up `key` in the table of `locale`.
pub fn text(locale: Locale, key: Text) -> &'static str {
    match locale {
        Locale::En => en::text(key),
        Locale::Fr => fr::text(key),
    }
}

/// Daily insight sentence; the index wraps around the table size.
pub fn insight(locale: Locale, index: usize) -> &'static str {
    let table = match locale {
        Locale::En => &en::INSIGHTS,
        Locale::Fr => &fr::INSIGHTS,
    };
    table[index % table.len()]
}

pub fn life_path_meaning(locale: Locale, path: LifePath) -> &'static str {
    match locale {
        Locale::En => en::life_path_meaning(path),
        Locale::Fr => fr::life_path_meaning(path),
    }
}

/// Replaces `{name}` placeholders in `template`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

/// Formats `key` with its placeholders filled in.
pub fn format(locale: Locale, key: Text, args: &[(&str, &str)]) -> String {
    interpolate(text(locale, key), args)
}

pub fn milestone_label(locale: Locale, milestone: &Milestone) -> String {
    let n = milestone.threshold.to_string();
    match (milestone.material, milestone.status) {
        (None, MilestoneStatus::Upcoming) => format(locale, Text::MilestoneTurning, &[("n", &n)]),
        (None, MilestoneStatus::Reached) => format(locale, Text::MilestoneTurned, &[("n", &n)]),
        (Some(material), status) => {
            let key = match status {
                MilestoneStatus::Upcoming => Text::MilestoneAnniversaryUpcoming,
                MilestoneStatus::Reached => Text::MilestoneAnniversaryReached,
            };
            let material = text(locale, Text::Wedding(material));
            format(locale, key, &[("n", &n), ("material", material)])
        }
    }
}

/// Localized month name for a 1-based month number.
pub fn month_name(locale: Locale, month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| text(locale, Text::Month(m)))
        .unwrap_or_default()
}

/// Relative day label: today, tomorrow, or "in N days".
pub fn countdown_label(locale: Locale, days: u32) -> String {
    match days {
        0 => text(locale, Text::Today).to_string(),
        1 => text(locale, Text::Tomorrow).to_string(),
        n => format(locale, Text::InDays, &[("days", &n.to_string())]),
    }
}

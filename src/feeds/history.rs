use serde::{Deserialize, Deserializer, Serialize};

use super::FeedError;
use crate::i18n::Locale;

const FEED_BASE: &str = "https://api.wikimedia.org/feed/v1/wikipedia";
/// Number of events kept from the selected list.
pub const MAX_EVENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    #[serde(deserialize_with = "year_from_any")]
    pub year: i32,
    pub text: String,
    #[serde(default)]
    pub pages: Vec<EventPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPage {
    pub titles: PageTitles,
    #[serde(default)]
    pub extract: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTitles {
    pub normalized: String,
}

#[derive(Debug, Deserialize)]
struct SelectedResponse {
    selected: Vec<HistoricalEvent>,
}

/// Wikimedia returns years as numbers, older mirrors as strings.
fn year_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }
    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

pub fn feed_url(locale: Locale, month: u32, day: u32) -> String {
    format!(
        "{FEED_BASE}/{}/onthisday/selected/{month:02}/{day:02}",
        locale.tag()
    )
}

/// Parses the "selected" list and keeps the first [`MAX_EVENTS`].
pub fn parse_selected(body: &str) -> Result<Vec<HistoricalEvent>, FeedError> {
    let response: SelectedResponse = serde_json::from_str(body)?;
    Ok(response.selected.into_iter().take(MAX_EVENTS).collect())
}

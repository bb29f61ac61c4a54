use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};

use super::FeedError;

const FEED_BASE: &str = "https://wttr.in";

/// Current conditions plus the resolved area name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub area: String,
    pub country: String,
    pub description: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity: f64,
    pub wind_kmph: f64,
    pub wind_direction: String,
    pub uv_index: f64,
}

#[derive(Debug, Deserialize)]
struct Value {
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentCondition {
    #[serde(rename = "temp_C", deserialize_with = "number")]
    temp_c: f64,
    #[serde(rename = "FeelsLikeC", deserialize_with = "number")]
    feels_like_c: f64,
    #[serde(deserialize_with = "number")]
    humidity: f64,
    #[serde(deserialize_with = "number")]
    windspeed_kmph: f64,
    #[serde(rename = "winddir16Point")]
    wind_direction: String,
    #[serde(deserialize_with = "number")]
    uv_index: f64,
    weather_desc: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearestArea {
    area_name: Vec<Value>,
    country: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    nearest_area: Vec<NearestArea>,
}

/// wttr.in encodes most numbers as strings.
fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn first(values: &[Value]) -> String {
    values
        .first()
        .map(|v| v.value.trim().to_string())
        .unwrap_or_default()
}

/// Builds the j1 URL; the location becomes one percent-encoded path segment.
pub fn feed_url(location: &str) -> Result<String, FeedError> {
    let location: String = location
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '+' } else { c })
        .collect();
    let mut url = Url::parse(FEED_BASE).map_err(|err| FeedError::Transport(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| FeedError::Transport(format!("{FEED_BASE} cannot take a path")))?
        .pop_if_empty()
        .push(&location);
    url.set_query(Some("format=j1"));
    Ok(url.into())
}

pub fn parse_report(body: &str) -> Result<WeatherReport, FeedError> {
    let response: WttrResponse = serde_json::from_str(body)?;
    let current = response
        .current_condition
        .into_iter()
        .next()
        .ok_or_else(|| FeedError::Schema("no current condition".into()))?;
    let (area, country) = response
        .nearest_area
        .first()
        .map(|area| (first(&area.area_name), first(&area.country)))
        .unwrap_or_default();

    Ok(WeatherReport {
        area,
        country,
        description: first(&current.weather_desc),
        temp_c: current.temp_c,
        feels_like_c: current.feels_like_c,
        humidity: current.humidity,
        wind_kmph: current.windspeed_kmph,
        wind_direction: current.wind_direction,
        uv_index: current.uv_index,
    })
}

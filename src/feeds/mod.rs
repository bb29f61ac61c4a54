//! Read-only external feeds: historical events for a day and current weather.
//!
//! Responses are validated with serde, cached with a TTL in the key-value
//! store, and degrade to "no data" on any failure.

pub mod cache;
pub mod history;
pub mod weather;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::i18n::Locale;
use crate::storage::{read_json, write_json, KeyValueStore, FEED_CACHE_KEY};
use crate::time::Clock;

pub use cache::TtlCache;
pub use history::HistoricalEvent;
pub use weather::WeatherReport;

/// Default lifetime of a cached response.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("birthday_core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response did not match the expected schema: {0}")]
    Schema(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Schema(err.to_string())
    }
}

/// Fetches a URL and returns its body.
pub trait FeedTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FeedError>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FeedError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        response
            .text()
            .map_err(|err| FeedError::Transport(err.to_string()))
    }
}

/// Cached access to the feeds.
pub struct FeedClient {
    transport: Box<dyn FeedTransport>,
    persistence: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl FeedClient {
    pub fn new(
        transport: Box<dyn FeedTransport>,
        persistence: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            transport,
            persistence,
            clock,
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Up to five selected events for the day, or nothing when the feed fails.
    pub fn on_this_day(&self, locale: Locale, month: u32, day: u32) -> Vec<HistoricalEvent> {
        let url = history::feed_url(locale, month, day);
        match self.fetch_with(&url, history::parse_selected) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(%url, error = %err, "historical events unavailable");
                Vec::new()
            }
        }
    }

    /// Current conditions for `location`, or `None` when the feed fails.
    pub fn weather(&self, location: &str) -> Option<WeatherReport> {
        let url = match weather::feed_url(location) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(%location, error = %err, "weather unavailable");
                return None;
            }
        };
        match self.fetch_with(&url, weather::parse_report) {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!(%url, error = %err, "weather unavailable");
                None
            }
        }
    }

    /// Parses the cached body for `url` while it is fresh, otherwise fetches it.
    ///
    /// A fetched body is cached only once `parse` accepts it.
    pub fn fetch_with<T, F>(&self, url: &str, parse: F) -> Result<T, FeedError>
    where
        F: Fn(&str) -> Result<T, FeedError>,
    {
        let now = self.clock.now();
        let mut cache = self.load_cache();
        if let Some(body) = cache.get(url, now) {
            match parse(body) {
                Ok(value) => {
                    tracing::debug!(%url, "feed cache hit");
                    return Ok(value);
                }
                Err(err) => tracing::warn!(%url, error = %err, "ignoring unparsable cache entry"),
            }
        }

        let body = self.transport.get(url)?;
        let value = parse(&body)?;
        cache.prune(now);
        cache.insert(url, body, now);
        if let Err(err) = write_json(self.persistence.as_ref(), FEED_CACHE_KEY, &cache) {
            tracing::warn!(error = %err, "failed to persist feed cache");
        }
        Ok(value)
    }

    fn load_cache(&self) -> TtlCache {
        let fresh = TtlCache::new(self.ttl);
        match read_json::<TtlCache>(self.persistence.as_ref(), FEED_CACHE_KEY) {
            Ok(Some(cache)) => cache.with_ttl(self.ttl),
            Ok(None) => fresh,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable feed cache");
                fresh
            }
        }
    }
}

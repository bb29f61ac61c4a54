use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    errors::{BirthdayError, Result},
    feeds::DEFAULT_TTL,
    i18n::Locale,
    search::{IndexConfig, DEFAULT_THRESHOLD},
    storage::json_backend::write_atomic,
    utils::{ensure_dir, paths::PathResolver},
};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub ui_color_enabled: bool,
    /// JSON roster replacing the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<PathBuf>,
    pub fuzzy_threshold: f64,
    pub cache_ttl_secs: u64,
    pub weather_location: String,
    pub notifications_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            ui_color_enabled: true,
            roster_path: None,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
            weather_location: "Papeete".into(),
            notifications_enabled: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(BirthdayError::ConfigError(format!(
                "fuzzy_threshold must be within 0..=1, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.weather_location.trim().is_empty() {
            return Err(BirthdayError::ConfigError(
                "weather_location must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            threshold: self.fuzzy_threshold,
            locale: self.locale,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Applies a `key = value` change coming from the command line.
    ///
    /// The configuration is left untouched when the new value does not validate.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |what: &str| {
            BirthdayError::ConfigError(format!("invalid value `{value}` for {what}"))
        };
        let mut next = self.clone();
        match key {
            "locale" => next.locale = Locale::from_tag(value),
            "ui_color_enabled" | "color" => {
                next.ui_color_enabled = parse_bool(value).ok_or_else(|| invalid(key))?
            }
            "roster_path" | "roster" => {
                next.roster_path = match value.trim() {
                    "" | "none" | "builtin" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "fuzzy_threshold" | "threshold" => {
                next.fuzzy_threshold = value.trim().parse().map_err(|_| invalid(key))?
            }
            "cache_ttl_secs" | "ttl" => {
                next.cache_ttl_secs = value.trim().parse().map_err(|_| invalid(key))?
            }
            "weather_location" | "location" => next.weather_location = value.trim().to_string(),
            "notifications_enabled" | "notifications" => {
                next.notifications_enabled = parse_bool(value).ok_or_else(|| invalid(key))?
            }
            other => {
                return Err(BirthdayError::ConfigError(format!(
                    "unknown configuration key `{other}`"
                )))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

pub struct ConfigManager {
    path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let config_root = PathResolver::config_dir_in(&base);
        ensure_dir(&config_root)?;
        let backups_dir = PathResolver::config_backup_dir_in(&base);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            backups_dir,
        })
    }

    /// Reads the configuration, falling back to defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| BirthdayError::ConfigError(format!("{}: {err}", self.path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Writes a timestamped copy and returns its file name.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String> {
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut name = format!("config_{}", timestamp);
        if let Some(label) = sanitize_note(note) {
            name.push('_');
            name.push_str(&label);
        }
        name.push_str(&format!(".{}", BACKUP_EXTENSION));
        let path = self.backups_dir.join(&name);
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&path, &json)?;
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<Config> {
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(BirthdayError::StorageError(format!(
                "configuration backup `{}` not found",
                backup_name
            )));
        }
        let data = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(name.to_string());
            }
        }
        entries.sort_by(|a, b| {
            parse_timestamp(b)
                .cmp(&parse_timestamp(a))
                .then_with(|| b.cmp(a))
        });
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.' | '_')) && !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `config_YYYYMMDD_HHMMSS[_note].json` -> timestamp.
fn parse_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let mut segments = stem.split('_').skip(1);
    let raw = format!("{}_{}", segments.next()?, segments.next()?);
    NaiveDateTime::parse_from_str(&raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_sanitized() {
        assert_eq!(sanitize_note(Some("  Before  trip!! ")), Some("before-trip".into()));
        assert_eq!(sanitize_note(Some("***")), None);
        assert_eq!(sanitize_note(None), None);
    }

    #[test]
    fn timestamps_parse_with_and_without_note() {
        let plain = parse_timestamp("config_20240301_083000.json").unwrap();
        let noted = parse_timestamp("config_20240301_083000_before-trip.json").unwrap();
        assert_eq!(plain, noted);
        assert!(parse_timestamp("notes.json").is_none());
    }

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();
        config.set("locale", "fr-FR").unwrap();
        assert_eq!(config.locale, Locale::Fr);
        config.set("threshold", "0.4").unwrap();
        assert_eq!(config.index_config().threshold, 0.4);
        assert!(config.set("threshold", "2").is_err());
        assert_eq!(config.fuzzy_threshold, 0.4);
        assert!(config.set("color", "maybe").is_err());
        assert!(config.set("nope", "1").is_err());
    }
}

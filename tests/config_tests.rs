mod common;

use std::fs;

use birthday_core::{config::Config, i18n::Locale};
use common::setup_test_env;

#[test]
fn missing_file_loads_defaults() {
    let (_, manager, _) = setup_test_env();
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.weather_location, "Papeete");
    assert_eq!(config.cache_ttl_secs, 600);
}

#[test]
fn saved_changes_are_reloaded() {
    let (_, manager, _) = setup_test_env();
    let mut config = manager.load().unwrap();
    config.set("locale", "fr-FR").unwrap();
    config.set("threshold", "0.2").unwrap();
    config.set("notifications", "off").unwrap();
    manager.save(&config).unwrap();

    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.locale, Locale::Fr);
    assert_eq!(reloaded.fuzzy_threshold, 0.2);
    assert!(!reloaded.notifications_enabled);
}

#[test]
fn backups_restore_earlier_settings() {
    let (_, manager, _) = setup_test_env();
    let mut config = Config::default();
    config.set("location", "Lyon").unwrap();
    let name = manager.backup(&config, Some("before trip")).unwrap();
    assert!(name.starts_with("config_"));
    assert!(name.ends_with("_before-trip.json"), "{name}");
    assert_eq!(manager.list_backups().unwrap(), vec![name.clone()]);

    let restored = manager.restore(&name).unwrap();
    assert_eq!(restored.weather_location, "Lyon");
    assert!(manager.restore("config_missing.json").is_err());
}

#[test]
fn corrupt_files_are_reported() {
    let (_, manager, _) = setup_test_env();
    fs::write(manager.path(), "{ not json").unwrap();
    assert!(manager.load().is_err());
}

#[test]
fn invalid_values_are_rejected() {
    let mut config = Config::default();
    assert!(config.set("threshold", "1.5").is_err());
    assert!(config.set("color", "maybe").is_err());
    assert!(config.set("favourite", "x").is_err());
    assert_eq!(config, Config::default());
}

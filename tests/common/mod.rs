#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use birthday_core::{
    config::ConfigManager,
    roster::{Category, RawBirthRecord},
    storage::json_backend::JsonFileStore,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated local store and config manager backed by a unique directory.
pub fn setup_test_env() -> (Arc<JsonFileStore>, ConfigManager, PathBuf) {
    let base = temp_base();
    let store = JsonFileStore::new(Some(base.clone())).expect("create local store");
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (Arc::new(store), config_manager, base)
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn sample_roster() -> Vec<RawBirthRecord> {
    vec![
        RawBirthRecord::new("Ada Lovelace", day(1990, 3, 12), Category::Female),
        RawBirthRecord::new("Bob", day(1985, 7, 30), Category::Male),
        RawBirthRecord::new("Cy", day(2000, 3, 2), Category::Male),
        RawBirthRecord::new("Dee & Eli", day(1999, 3, 20), Category::Anniversary),
    ]
}

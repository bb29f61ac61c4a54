#![doc(test(attr(deny(warnings))))]

//! Birthday Core derives decorative facts about a roster of birthdays and
//! wedding anniversaries (zodiac, birthstone, moon phase, milestones,
//! countdowns) and serves them through a fuzzy, reactive filter store.

pub mod astro;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod derive;
pub mod errors;
pub mod feeds;
pub mod i18n;
pub mod notify;
pub mod roster;
pub mod search;
pub mod stats;
pub mod storage;
pub mod store;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Birthday Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

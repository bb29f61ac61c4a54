//! Shell context, dispatch, and CLI error types.

use std::{env, io, sync::Arc};

use chrono::NaiveDate;
use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::derive::{self, DerivedBirthday};
use crate::errors::BirthdayError;
use crate::feeds::{FeedClient, FeedError, FeedTransport, HttpTransport};
use crate::i18n::Locale;
use crate::roster::{self, RawBirthRecord, DATE_FORMAT};
use crate::storage::{json_backend::JsonFileStore, KeyValueStore};
use crate::store::{FilterStore, Theme};
use crate::time::{Clock, FixedClock, SystemClock};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::output::{self, OutputPreferences};

/// Pins "today" for deterministic sessions, as `YYYY-MM-DD`.
pub const TODAY_ENV: &str = "BIRTHDAY_CORE_TODAY";
/// Disables network access; feeds then report no data.
pub const OFFLINE_ENV: &str = "BIRTHDAY_CORE_OFFLINE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BirthdayError),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Command(String),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Input(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] BirthdayError),
    #[error("exit requested")]
    ExitRequested,
}

/// Transport used when the network is switched off.
struct OfflineTransport;

impl FeedTransport for OfflineTransport {
    fn get(&self, url: &str) -> Result<String, FeedError> {
        Err(FeedError::Transport(format!("offline, skipped {url}")))
    }
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) persistence: Arc<dyn KeyValueStore>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) roster: Vec<RawBirthRecord>,
    pub(crate) store: FilterStore,
    pub(crate) feeds: FeedClient,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Loads config, roster and persisted state. `locale` overrides the configured one.
    pub fn new(mode: CliMode, locale: Option<Locale>) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let mut config = config_manager.load()?;
        if let Some(locale) = locale {
            config.locale = locale;
        }

        let clock = clock_from_env()?;
        let roster = match &config.roster_path {
            Some(path) => roster::load_roster(path)?,
            None => roster::builtin_roster(),
        };
        let persistence: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new_default()?);
        let store = build_store(&roster, &config, clock.as_ref(), persistence.clone())?;
        let feeds = build_feeds(&config, persistence.clone(), clock.clone());

        let context = Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            config,
            config_manager,
            persistence,
            clock,
            roster,
            store,
            feeds,
            running: true,
        };
        context.apply_output_preferences();
        tracing::debug!(
            records = context.store.records().len(),
            locale = %context.config.locale,
            "shell context ready"
        );
        Ok(context)
    }

    pub(crate) fn locale(&self) -> Locale {
        self.config.locale
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    /// Looks a record up by exact name first, then by case-insensitive prefix.
    pub(crate) fn find_record(&self, query: &str) -> Result<&DerivedBirthday, CommandError> {
        let records = self.store.records();
        let needle = query.trim().to_lowercase();
        records
            .iter()
            .find(|record| record.name.to_lowercase() == needle)
            .or_else(|| {
                records
                    .iter()
                    .find(|record| record.name.to_lowercase().starts_with(&needle))
            })
            .ok_or_else(|| CommandError::InvalidArguments(format!("no birthday named `{query}`")))
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_mode: !self.config.ui_color_enabled || self.mode == CliMode::Script,
            light_theme: self.store.state().theme == Theme::Light,
        });
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Installs `config` and rebuilds everything that depends on it.
    pub(crate) fn replace_config(&mut self, config: Config) -> CommandResult {
        let roster = match &config.roster_path {
            Some(path) => roster::load_roster(path)?,
            None => roster::builtin_roster(),
        };
        self.store = build_store(&roster, &config, self.clock.as_ref(), self.persistence.clone())?;
        self.feeds = build_feeds(&config, self.persistence.clone(), self.clock.clone());
        self.roster = roster;
        self.config = config;
        self.apply_output_preferences();
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.get(command).map(|definition| definition.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn prompt(&self) -> String {
        let view = self.store.filtered();
        let search = self.store.state().search.trim();
        if search.is_empty() {
            format!("birthdays [{}/{}] ⮞ ", view.len(), self.store.records().len())
        } else {
            format!(
                "birthdays [{}/{}] \"{}\" ⮞ ",
                view.len(),
                self.store.records().len(),
                search
            )
        }
    }
}

fn clock_from_env() -> Result<Arc<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|err| {
                CliError::Input(format!("{TODAY_ENV} must be YYYY-MM-DD: {err}"))
            })?;
            Ok(Arc::new(FixedClock::on(date)))
        }
        _ => Ok(Arc::new(SystemClock)),
    }
}

fn build_store(
    roster: &[RawBirthRecord],
    config: &Config,
    clock: &dyn Clock,
    persistence: Arc<dyn KeyValueStore>,
) -> Result<FilterStore, BirthdayError> {
    let records = derive::build_with_clock(roster, clock)?;
    Ok(FilterStore::new(records, config.index_config(), persistence))
}

fn build_feeds(config: &Config, persistence: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> FeedClient {
    let transport: Box<dyn FeedTransport> = if env::var_os(OFFLINE_ENV).is_some() {
        Box::new(OfflineTransport)
    } else {
        Box::new(HttpTransport::new())
    };
    FeedClient::new(transport, persistence, clock).with_ttl(config.cache_ttl())
}

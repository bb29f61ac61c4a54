use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// ASCII-only rules and no ANSI styling.
    pub plain_mode: bool,
    /// Light terminals get darker accent colors.
    pub light_theme: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    colored::control::set_override(!prefs.plain_mode);
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "[ok] ",
        MessageKind::Warning => "[!] ",
        MessageKind::Error => "[x] ",
        MessageKind::Hint => "hint: ",
        MessageKind::Section => "",
    }
}

pub(crate) fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let text = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{}{}", label(kind), message),
    };
    if prefs.plain_mode {
        return text;
    }
    match (kind, prefs.light_theme) {
        (MessageKind::Success, false) => text.bright_green().to_string(),
        (MessageKind::Success, true) => text.green().to_string(),
        (MessageKind::Warning, false) => text.bright_yellow().to_string(),
        (MessageKind::Warning, true) => text.yellow().to_string(),
        (MessageKind::Error, false) => text.bright_red().to_string(),
        (MessageKind::Error, true) => text.red().to_string(),
        (MessageKind::Hint, _) => text.dimmed().to_string(),
        (MessageKind::Section, false) => text.bold().bright_magenta().to_string(),
        (MessageKind::Section, true) => text.bold().magenta().to_string(),
        (MessageKind::Info, _) => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Accent used for names and highlighted values.
pub fn accent(text: &str) -> String {
    let prefs = current_preferences();
    if prefs.plain_mode {
        text.to_string()
    } else if prefs.light_theme {
        text.blue().bold().to_string()
    } else {
        text.bright_cyan().bold().to_string()
    }
}

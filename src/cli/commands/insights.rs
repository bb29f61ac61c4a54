use chrono::{Datelike, NaiveDate};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, accent};
use crate::cli::views;
use crate::derive::DerivedBirthday;
use crate::errors::Result;
use crate::i18n::{self, Text};
use crate::notify::{Notification, NotificationService, Notifier, NotifyOutcome, Permission};

use super::{split_flags, CommandDefinition};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "stats",
            "Distributions, records and charts",
            "stats [overview|ages|heatmap|pyramid|compat] [--all]",
            cmd_stats,
        ),
        CommandDefinition::new(
            "notify",
            "Send today's birthday digest once per day",
            "notify",
            cmd_notify,
        ),
        CommandDefinition::new(
            "events",
            "Historical events that happened on a day",
            "events [MM-DD]",
            cmd_events,
        ),
        CommandDefinition::new(
            "weather",
            "Current weather for a location",
            "weather [location]",
            cmd_weather,
        ),
    ]
}

fn cmd_stats(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, flags) = split_flags(args);
    let records: Vec<DerivedBirthday> = if flags.contains(&"--all") {
        context.store.records().to_vec()
    } else {
        context.store.filtered().iter().cloned().collect()
    };
    let locale = context.locale();

    match positional.first().map(|value| value.to_lowercase()).as_deref() {
        None | Some("overview") => views::print_overview(locale, &records),
        Some("ages") => views::print_ages(&records),
        Some("heatmap") => views::print_heatmap(locale, &records),
        Some("pyramid") => views::print_pyramid(&records),
        Some("compat") => views::print_compatibility(&records),
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown stats view `{other}`"
            )))
        }
    }
    Ok(())
}

/// Prints notifications in the terminal; permission follows the configuration.
struct ConsoleNotifier {
    enabled: bool,
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> Permission {
        if self.enabled {
            Permission::Granted
        } else {
            Permission::Denied
        }
    }

    fn deliver(&self, notification: &Notification) -> Result<()> {
        output::section(&notification.title);
        output::info(&notification.body);
        Ok(())
    }
}

fn cmd_notify(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let notifier = ConsoleNotifier {
        enabled: context.config.notifications_enabled,
    };
    let service = NotificationService::new(context.persistence.clone(), context.locale());
    match service.check_and_notify(context.store.records(), context.today(), &notifier)? {
        NotifyOutcome::Sent(_) => {}
        NotifyOutcome::PermissionMissing => {
            output::warning("Notifications are disabled.");
            output::hint("Enable them with `config set notifications on`.");
        }
        NotifyOutcome::AlreadyNotified => output::info("Already notified today."),
        NotifyOutcome::NothingDue => output::info("No birthdays today or tomorrow."),
    }
    Ok(())
}

/// Parses `MM-DD`, accepting Feb 29.
fn parse_month_day(value: &str) -> std::result::Result<(u32, u32), CommandError> {
    let invalid = || CommandError::InvalidArguments(format!("`{value}` is not a MM-DD day"));
    let (month, day) = value.split_once('-').ok_or_else(invalid)?;
    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let day: u32 = day.trim().parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
    Ok((month, day))
}

fn cmd_events(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (month, day) = match args.first() {
        Some(value) => parse_month_day(value)?,
        None => {
            let today = context.today();
            (today.month(), today.day())
        }
    };
    let locale = context.locale();
    output::section(format!("{} {}", day, i18n::month_name(locale, month)));

    let events = context.feeds.on_this_day(locale, month, day);
    if events.is_empty() {
        output::info(i18n::text(locale, Text::NoEvents));
        return Ok(());
    }
    for event in events {
        output::info(format!("  {} {}", accent(&event.year.to_string()), event.text));
        if let Some(page) = event.pages.first() {
            output::hint(format!("    {}", page.titles.normalized));
        }
    }
    Ok(())
}

fn cmd_weather(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let location = if args.is_empty() {
        context.config.weather_location.clone()
    } else {
        args.join(" ")
    };
    let Some(report) = context.feeds.weather(&location) else {
        output::info(i18n::text(context.locale(), Text::NoWeather));
        return Ok(());
    };
    output::section(format!("{}, {}", report.area, report.country));
    output::info(format!("  {}", report.description));
    output::info(format!(
        "  {:.0}°C (feels like {:.0}°C)",
        report.temp_c, report.feels_like_c
    ));
    output::info(format!("  Humidity {:.0}%", report.humidity));
    output::info(format!(
        "  Wind {:.0} km/h {}",
        report.wind_kmph, report.wind_direction
    ));
    output::info(format!("  UV index {:.0}", report.uv_index));
    Ok(())
}

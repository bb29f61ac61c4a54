use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output::{self, section as output_section};
use crate::i18n::Locale;
use crate::utils::build_info;

use super::{CommandDefinition, CommandRegistry};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new(
            "config",
            "View and manage preferences",
            "config [show|set <key> <value>|backup [note]|backups|restore <name>]",
            cmd_config,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Birthday Core {}", meta.version));
    output::info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    output::info(format!("  Built at     : {}", meta.timestamp));
    output::info(format!("  Target       : {}", meta.target));
    output::info(format!("  Profile      : {}", meta.profile));
    output::info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.iter() {
        output::info(format!("  {:<10} {}", entry.name, entry.description));
    }
    output::info("Use `help <command>` for details.");
}

fn print_command(entry: &CommandDefinition) {
    output_section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.command(&name) {
            Some(entry) => print_command(entry),
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }

    print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <key> <value>".into(),
                ));
            }
            let value = args[2..].join(" ");
            let mut next = context.config.clone();
            next.set(&args[1].to_lowercase(), value.trim())?;
            context.replace_config(next)?;
            context.persist_config()?;
            output::success("Configuration updated.");
            Ok(())
        }
        "backup" => {
            let note = (args.len() > 1).then(|| args[1..].join(" "));
            let name = context
                .config_manager
                .backup(&context.config, note.as_deref())?;
            output::success(format!("Configuration backed up as `{name}`."));
            Ok(())
        }
        "backups" => {
            let backups = context.config_manager.list_backups()?;
            if backups.is_empty() {
                output::info("No configuration backups yet.");
            }
            for name in backups {
                output::info(format!("  {name}"));
            }
            Ok(())
        }
        "restore" => {
            let name = args.get(1).ok_or_else(|| {
                CommandError::InvalidArguments("usage: config restore <name>".into())
            })?;
            let restored = context.config_manager.restore(name)?;
            context.replace_config(restored)?;
            context.persist_config()?;
            output::success(format!("Configuration restored from `{name}`."));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output_section("Configuration");
    output::info(format!(
        "  Locale: {} ({})",
        config.locale,
        Locale::ALL
            .iter()
            .map(|locale| locale.tag())
            .collect::<Vec<_>>()
            .join("|")
    ));
    output::info(format!(
        "  Colors: {}",
        if config.ui_color_enabled { "on" } else { "off" }
    ));
    output::info(format!(
        "  Roster: {}",
        config
            .roster_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(built-in)".into())
    ));
    output::info(format!("  Fuzzy threshold: {}", config.fuzzy_threshold));
    output::info(format!("  Feed cache TTL: {}s", config.cache_ttl_secs));
    output::info(format!("  Weather location: {}", config.weather_location));
    output::info(format!(
        "  Notifications: {}",
        if config.notifications_enabled { "on" } else { "off" }
    ));
    output::info(format!("  File: {}", context.config_manager.path().display()));
}

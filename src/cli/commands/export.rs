use std::{fs, path::Path};

use crate::calendar::{parse_ics, to_ics};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::roster::RawBirthRecord;

use super::{split_flags, CommandDefinition};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "export",
        "Write an iCalendar file with yearly events",
        "export <file.ics> [--visible]",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, flags) = split_flags(args);
    let target = positional.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: export <file.ics> [--visible]".into())
    })?;

    let records: Vec<RawBirthRecord> = if flags.contains(&"--visible") {
        context
            .store
            .filtered()
            .iter()
            .map(|record| RawBirthRecord::new(record.name.clone(), record.date, record.category))
            .collect()
    } else {
        context.roster.clone()
    };

    let calendar = to_ics(&records, context.clock.now());
    let events = parse_ics(&calendar)?;
    if events.len() != records.len() {
        return Err(CommandError::Message(format!(
            "calendar holds {} events, expected {}",
            events.len(),
            records.len()
        )));
    }

    let path = Path::new(target);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, calendar)?;
    tracing::info!(path = %path.display(), events = events.len(), "calendar exported");
    output::success(format!(
        "Exported {} events to {}.",
        events.len(),
        path.display()
    ));
    Ok(())
}

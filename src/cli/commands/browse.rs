use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::views;
use crate::roster::Category;

use super::CommandDefinition;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "list",
            "List birthdays in the current view",
            "list [--all]",
            cmd_list,
        ),
        CommandDefinition::new("show", "Show every detail of one birthday", "show <name>", cmd_show),
        CommandDefinition::new(
            "expand",
            "Expand or collapse a birthday in the view",
            "expand [name]",
            cmd_expand,
        ),
        CommandDefinition::new(
            "search",
            "Fuzzy search names, signs, months, stones and more",
            "search <text>",
            cmd_search,
        ),
        CommandDefinition::new("clear", "Clear the search text", "clear", cmd_clear),
        CommandDefinition::new(
            "toggle",
            "Show or hide a category",
            "toggle <male|female|anniversary>",
            cmd_toggle,
        ),
        CommandDefinition::new("theme", "Switch between dark and light", "theme", cmd_theme),
    ]
}

fn print_view(context: &ShellContext) {
    let view = context.store.filtered();
    views::print_records(context.locale(), view.iter());
    let state = context.store.state();
    let hidden: Vec<&str> = Category::ALL
        .iter()
        .filter(|category| !state.show.allows(**category))
        .map(|category| category.key())
        .collect();
    if !hidden.is_empty() {
        output::hint(format!("Hidden: {}", hidden.join(", ")));
    }
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.contains(&"--all") {
        views::print_records(context.locale(), context.store.records());
        return Ok(());
    }
    print_view(context);
    if let Some(expanded) = context.store.expanded() {
        views::print_details(context.locale(), expanded);
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: show <name>".into()));
    }
    let record = context.find_record(&args.join(" "))?;
    views::print_details(context.locale(), record);
    Ok(())
}

fn cmd_expand(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        let Some(key) = context.store.state().expanded.clone() else {
            output::info("Nothing is expanded.");
            return Ok(());
        };
        context.store.toggle_expanded(key);
        output::info("Collapsed.");
        return Ok(());
    }
    let key = context.find_record(&args.join(" "))?.key();
    context.store.toggle_expanded(key);
    match context.store.expanded() {
        Some(record) => views::print_details(context.locale(), record),
        None => output::info("Collapsed."),
    }
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.store.set_search(args.join(" "));
    print_view(context);
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.set_search(String::new());
    print_view(context);
    Ok(())
}

fn cmd_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let category = args
        .first()
        .and_then(|value| Category::parse(value))
        .ok_or_else(|| {
            CommandError::InvalidArguments("usage: toggle <male|female|anniversary>".into())
        })?;
    context.store.toggle_category(category);
    let shown = context.store.state().show.allows(category);
    output::success(format!(
        "{} {}.",
        category.key(),
        if shown { "shown" } else { "hidden" }
    ));
    print_view(context);
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.toggle_theme();
    context.apply_output_preferences();
    output::success(format!("Theme set to {}.", context.store.state().theme));
    Ok(())
}

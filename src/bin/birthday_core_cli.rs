use std::{env, process};

use birthday_core::{
    cli::{run_cli, run_command},
    i18n::Locale,
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut locale = None;
    let mut rest = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" | "-l" => {
                let tag = args.next().unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                });
                locale = Some(Locale::from_tag(&tag));
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => {
                rest.push(arg);
                rest.extend(args.by_ref());
            }
        }
    }

    match rest.first().map(String::as_str) {
        None | Some("shell") => run_cli(locale)?,
        Some(_) => run_command(locale, &rest)?,
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: birthday_core_cli [--locale <tag>] [command] [args]\n\
         Commands:\n  \
         list [--all]\n  \
         show <name>\n  \
         export <file.ics> [--visible]\n  \
         stats [overview|ages|heatmap|pyramid|compat]\n  \
         notify\n  \
         events [MM-DD]\n  \
         weather [location]\n  \
         version\n  \
         shell (default)"
    );
}

//! Interactive shell and one-shot commands for the birthday dashboard.

pub mod commands;
pub mod core;
pub mod output;
pub mod shell;
pub mod table;
pub mod views;

pub use core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::{run_cli, run_command};

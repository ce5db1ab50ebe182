//! Handler for the `completions` command.

use std::io::stdout;
use std::path::Path;

use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate};
use colored::*;

use chatmark_lib::exit_codes::exit;

/// Print a completion script, or the supported shell names with `--list`.
pub fn handle_completions(shell: Option<Shell>, list: bool) {
    if list {
        for shell in Shell::value_variants() {
            println!("{shell}");
        }
        return;
    }

    let Some(shell) = shell.or_else(shell_from_env) else {
        eprintln!(
            "{}: cannot tell the shell from $SHELL; pass one, e.g. `chatmark completions zsh`",
            "Error".red().bold()
        );
        exit::tool_error();
    };

    generate(shell, &mut crate::Cli::command(), "chatmark", &mut stdout());
}

fn shell_from_env() -> Option<Shell> {
    let path = std::env::var_os("SHELL")?;
    Shell::from_shell_path(Path::new(&path))
}

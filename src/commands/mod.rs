//! Command handlers for the chatmark CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to. Handlers return the process exit code.

pub mod completions;
pub mod cursor;
pub mod image_size;
pub mod init;
pub mod language;
pub mod scan;
pub mod schema;
pub mod version;

use std::fs;
use std::io::{self, Read};

use anyhow::Context as _;

/// Read a file argument, treating `-` as stdin.
pub fn read_input(file: &str) -> anyhow::Result<String> {
    if file == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))
    }
}

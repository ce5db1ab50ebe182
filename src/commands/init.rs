//! Handler for the `init` command.

use std::path::Path;

use chatmark_lib::config::create_default_config;
use chatmark_lib::exit_codes::SUCCESS;

/// Write a commented default configuration file.
pub fn handle_init(path: &Path) -> anyhow::Result<i32> {
    create_default_config(path)?;
    println!("Created default configuration file: {}", path.display());
    Ok(SUCCESS)
}

//! Handler for the `schema` command.

use chatmark_lib::config::Config;
use chatmark_lib::exit_codes::SUCCESS;

/// Print the JSON schema of `.chatmark.toml`.
pub fn handle_schema() -> anyhow::Result<i32> {
    let schema = schemars::schema_for!(Config);
    let schema_json = serde_json::to_string_pretty(&schema)?;
    println!("{schema_json}");
    Ok(SUCCESS)
}

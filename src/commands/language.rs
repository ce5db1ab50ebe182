//! Handlers for the `language`, `extension` and `languages` commands.

use chatmark_lib::exit_codes::{NOT_RESOLVED, SUCCESS};
use chatmark_lib::languages::LanguageEntry;
use chatmark_lib::output::LanguageReport;

use crate::Context;

/// Resolve each token and print one report per token.
pub fn handle_language(ctx: &Context, tokens: &[String]) -> anyhow::Result<i32> {
    let resolver = ctx.loaded.config.language_resolver()?;

    let reports: Vec<LanguageReport> = tokens
        .iter()
        .map(|token| LanguageReport {
            token: token.clone(),
            language: resolver.resolve(token),
            display_name: resolver.display_name(token),
        })
        .collect();

    print!("{}", ctx.formatter.format_languages(&reports));

    if reports.iter().all(LanguageReport::is_resolved) {
        Ok(SUCCESS)
    } else {
        Ok(NOT_RESOLVED)
    }
}

/// Resolve a file extension.
pub fn handle_extension(ctx: &Context, extension: &str) -> anyhow::Result<i32> {
    let resolver = ctx.loaded.config.language_resolver()?;

    let language = resolver.language_for_extension(extension);
    let report = LanguageReport {
        token: extension.to_string(),
        display_name: resolver.display_name(&language),
        language,
    };

    print!("{}", ctx.formatter.format_languages(std::slice::from_ref(&report)));

    Ok(if report.is_resolved() { SUCCESS } else { NOT_RESOLVED })
}

/// Print the language table and the configured aliases.
pub fn handle_languages(ctx: &Context) -> anyhow::Result<i32> {
    let resolver = ctx.loaded.config.language_resolver()?;

    let entries: Vec<&LanguageEntry> = resolver.entries().collect();
    let user_aliases: Vec<(&str, &str)> = resolver.user_aliases().collect();

    print!("{}", ctx.formatter.format_table(&entries, &user_aliases));
    Ok(SUCCESS)
}

//! JSON output formatter

use serde_json::{Value, json};

use crate::code_fence::FencedBlock;
use crate::image_size::ImageSize;
use crate::languages::LanguageEntry;
use crate::output::{CursorReport, LanguageReport, OutputFormatter};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

impl OutputFormatter for JsonFormatter {
    fn format_languages(&self, reports: &[LanguageReport]) -> String {
        pretty(&reports)
    }

    fn format_table(&self, entries: &[&LanguageEntry], user_aliases: &[(&str, &str)]) -> String {
        let languages: Vec<Value> = entries
            .iter()
            .map(|entry| {
                json!({
                    "key": entry.key,
                    "display_name": entry.display_name,
                    "extensions": entry.extensions,
                    "aliases": entry.aliases,
                })
            })
            .collect();

        let user: serde_json::Map<String, Value> = user_aliases
            .iter()
            .map(|(alias, key)| ((*alias).to_string(), Value::from(*key)))
            .collect();

        pretty(&json!({
            "languages": languages,
            "user_aliases": user,
        }))
    }

    fn format_image_size(&self, size: &ImageSize) -> String {
        pretty(size)
    }

    fn format_blocks(&self, blocks: &[FencedBlock], file_path: &str) -> String {
        pretty(&json!({
            "file": file_path,
            "blocks": blocks,
        }))
    }

    fn format_cursor(&self, report: &CursorReport) -> String {
        pretty(report)
    }
}

//! Output formatting module for chatmark
//!
//! Every command produces one of a few report shapes; a formatter turns
//! those into either coloured text for people or JSON for scripts.

use serde::Serialize;

use crate::code_fence::{FencedBlock, KeyboardType};
use crate::image_size::ImageSize;
use crate::languages::LanguageEntry;

pub mod formatters;

pub use formatters::*;

/// Result of resolving one language token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageReport {
    /// Input exactly as given
    pub token: String,
    /// Canonical key, empty when unknown
    pub language: String,
    /// Display name, empty when unknown
    pub display_name: String,
}

impl LanguageReport {
    pub fn is_resolved(&self) -> bool {
        !self.language.is_empty()
    }
}

/// Result of a cursor query against a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorReport {
    pub offset: usize,
    pub in_code_block: bool,
    pub keyboard: KeyboardType,
}

/// Trait for output formatters
pub trait OutputFormatter {
    fn format_languages(&self, reports: &[LanguageReport]) -> String;

    /// The language table plus any user aliases (alias, key)
    fn format_table(&self, entries: &[&LanguageEntry], user_aliases: &[(&str, &str)]) -> String;

    fn format_image_size(&self, size: &ImageSize) -> String;

    fn format_blocks(&self, blocks: &[FencedBlock], file_path: &str) -> String;

    fn format_cursor(&self, report: &CursorReport) -> String;
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable, coloured when writing to a terminal
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "full" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self, use_colors: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text if use_colors => Box::new(TextFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::without_colors()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

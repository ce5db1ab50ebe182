//! Default text output formatter with colors

use colored::*;

use crate::code_fence::FencedBlock;
use crate::image_size::ImageSize;
use crate::languages::LanguageEntry;
use crate::output::{CursorReport, LanguageReport, OutputFormatter};

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Trims float noise so 50.0 prints as "50" and 33.333.. as "33.33"
fn dimension(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

impl OutputFormatter for TextFormatter {
    fn format_languages(&self, reports: &[LanguageReport]) -> String {
        let mut output = String::new();
        for report in reports {
            let line = if report.is_resolved() {
                format!(
                    "{} -> {} ({})",
                    report.token,
                    self.paint(&report.language, |s| s.green().bold()),
                    report.display_name
                )
            } else {
                format!("{} -> {}", report.token, self.paint("unknown", |s| s.yellow()))
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn format_table(&self, entries: &[&LanguageEntry], user_aliases: &[(&str, &str)]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&format!(
                "{:<14} {:<14} aliases: {:<28} extensions: {}\n",
                self.paint(entry.key, |s| s.cyan()),
                entry.display_name,
                if entry.aliases.is_empty() {
                    "-".to_string()
                } else {
                    entry.aliases.join(", ")
                },
                entry.extensions.join(", ")
            ));
        }

        if !user_aliases.is_empty() {
            output.push('\n');
            output.push_str(&self.paint("User aliases:", |s| s.bold()));
            output.push('\n');
            for (alias, key) in user_aliases {
                output.push_str(&format!("  {alias} -> {key}\n"));
            }
        }
        output
    }

    fn format_image_size(&self, size: &ImageSize) -> String {
        format!("{}x{}\n", dimension(size.width), dimension(size.height))
    }

    fn format_blocks(&self, blocks: &[FencedBlock], file_path: &str) -> String {
        let mut output = String::new();
        for block in blocks {
            let language = if block.is_highlighted() {
                format!("{} ({})", self.paint(&block.language, |s| s.green()), block.display_name)
            } else if block.token.is_empty() {
                self.paint("no language", |s| s.dimmed())
            } else {
                format!("{} {}", block.token, self.paint("(unknown)", |s| s.yellow()))
            };
            output.push_str(&format!(
                "{}:{}-{}: {}\n",
                self.paint(file_path, |s| s.blue().underline()),
                block.start_line,
                block.end_line,
                language
            ));
        }

        let unknown = blocks.iter().filter(|b| !b.is_highlighted() && !b.token.is_empty()).count();
        output.push_str(&format!(
            "{} fenced block(s), {} with unknown language\n",
            blocks.len(),
            unknown
        ));
        output
    }

    fn format_cursor(&self, report: &CursorReport) -> String {
        format!(
            "offset {}: {} (keyboard: {})\n",
            report.offset,
            if report.in_code_block {
                self.paint("inside code block", |s| s.green())
            } else {
                "outside code block".to_string()
            },
            report.keyboard
        )
    }
}

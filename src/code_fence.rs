//! Fenced code block helpers for message drafts and rendered messages.
//!
//! Two unrelated consumers share this module: the message editor, which needs
//! to know whether the cursor sits inside a ```` ``` ```` block while the user is
//! typing, and the renderer, which needs each fenced block's language.

use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use serde::Serialize;

use crate::language_resolver::LanguageResolver;

/// A closed ```` ``` ```` block, or an opening fence running to the end of the text.
/// Fences must sit alone on their line; `\r\n` line endings are accepted.
static CODE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?msR)^```$(.*?)^```$|^```$(.*)").unwrap());

/// Keyboard variant the editor should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    Default,
    /// Disables smart punctuation, so `--` is not turned into an em dash inside code
    EmailAddress,
}

impl KeyboardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardType::Default => "default",
            KeyboardType::EmailAddress => "email-address",
        }
    }
}

impl std::fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte ranges covered by code blocks in a draft.
///
/// Each range ends one byte past the match so a cursor placed right after a
/// closing fence still counts as inside.
pub fn code_block_ranges(text: &str) -> Vec<Range<usize>> {
    CODE_BLOCK_REGEX
        .find_iter(text)
        .map(|m| m.start()..m.end() + 1)
        .collect()
}

/// Convert a cursor position in UTF-16 code units, as reported by text
/// inputs, to a byte offset into `text`.
///
/// A position inside a surrogate pair maps to the end of that character.
/// Positions past the end keep their distance from it.
pub fn utf16_to_byte_offset(text: &str, cursor: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        if units >= cursor {
            return idx;
        }
        units += ch.len_utf16();
    }
    text.len() + cursor.saturating_sub(units)
}

/// Whether a cursor falls inside a code block (both ends inclusive).
///
/// `cursor` is in UTF-16 code units.
pub fn cursor_in_code_block(text: &str, cursor: usize) -> bool {
    let cursor = utf16_to_byte_offset(text, cursor);
    code_block_ranges(text)
        .iter()
        .any(|range| cursor >= range.start && cursor <= range.end)
}

/// Keyboard for the current cursor position.
///
/// `enabled` gates the switch entirely; platforms without smart punctuation
/// should pass `false`.
pub fn keyboard_type(text: &str, cursor: usize, enabled: bool) -> KeyboardType {
    if enabled && cursor_in_code_block(text, cursor) {
        KeyboardType::EmailAddress
    } else {
        KeyboardType::Default
    }
}

/// Language token of a fence info string.
///
/// `"rust ignore"` -> `"rust"`, `"python{.numberLines}"` -> `"python"`.
pub fn info_language(info: &str) -> &str {
    let first = info.split_whitespace().next().unwrap_or("");
    match first.find('{') {
        Some(idx) => &first[..idx],
        None => first,
    }
}

/// A fenced code block found in a Markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FencedBlock {
    /// 1-indexed line of the opening fence
    pub start_line: usize,
    /// 1-indexed line of the closing fence (or last line if unclosed)
    pub end_line: usize,
    /// Full info string after the fence
    pub info_string: String,
    /// Language token as written
    pub token: String,
    /// Canonical highlight key, empty when unknown
    pub language: String,
    /// Label for the block header, empty when unknown
    pub display_name: String,
    pub fence_char: char,
    pub fence_length: usize,
}

impl FencedBlock {
    pub fn is_highlighted(&self) -> bool {
        !self.language.is_empty()
    }
}

struct FencedBlockBuilder {
    start_line: usize,
    info_string: String,
    fence_char: char,
    fence_length: usize,
}

/// Extract all fenced code blocks, resolving their languages.
///
/// Indented code blocks carry no language and are skipped.
pub fn scan_fenced_blocks(content: &str, resolver: &LanguageResolver) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<FencedBlockBuilder> = None;

    let parser = Parser::new_ext(content, Options::all()).into_offset_iter();

    for (event, range) in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let start_line = content[..range.start].matches('\n').count();

                // The event range starts at or before the fence, after any list marker
                let fence = content[range.start..].trim_start_matches([' ', '\t', '>']);
                let fence_char = if fence.starts_with('~') { '~' } else { '`' };
                let fence_length = fence.chars().take_while(|&c| c == fence_char).count();

                current = Some(FencedBlockBuilder {
                    start_line,
                    info_string: info.trim().to_string(),
                    fence_char,
                    fence_length,
                });
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(builder) = current.take() {
                    // The range of an unclosed block ends after its trailing newline
                    let end = if content[..range.end].ends_with('\n') {
                        range.end - 1
                    } else {
                        range.end
                    };
                    let end_line = content[..end].matches('\n').count();

                    let token = info_language(&builder.info_string).to_string();
                    let entry = resolver.resolve_entry(&token);
                    if entry.is_none() && !token.is_empty() {
                        log::debug!("No highlight language for '{}' at line {}", token, builder.start_line + 1);
                    }

                    blocks.push(FencedBlock {
                        start_line: builder.start_line + 1,
                        end_line: end_line + 1,
                        token,
                        language: entry.map(|e| e.key.to_string()).unwrap_or_default(),
                        display_name: entry.map(|e| e.display_name.to_string()).unwrap_or_default(),
                        info_string: builder.info_string,
                        fence_char: builder.fence_char,
                        fence_length: builder.fence_length,
                    });
                }
            }
            _ => {}
        }
    }

    blocks
}

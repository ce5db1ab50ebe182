//! Markdown presentation helpers for chat clients.
//!
//! - [`language_resolver`]: code fence language tokens to highlight keys and labels
//! - [`image_size`]: render sizes for inline images with partial metadata
//! - [`code_fence`]: cursor-in-code-block detection and fenced block scanning
//!
//! All of these are pure functions over read-only data and may be called
//! from any thread.

pub mod code_fence;
pub mod config;
pub mod exit_codes;
pub mod image_size;
pub mod language_resolver;
pub mod languages;
pub mod output;
pub mod viewport;

pub use code_fence::{
    FencedBlock, KeyboardType, cursor_in_code_block, keyboard_type, scan_fenced_blocks, utf16_to_byte_offset,
};
pub use image_size::{ImageSize, ImageSizer, KnownSize, SourceSize, resolve_image_size};
pub use language_resolver::{LanguageResolver, ResolverError, display_name, language_for_extension, resolve_language};
pub use languages::{LANGUAGES, LanguageEntry};
pub use viewport::Viewport;

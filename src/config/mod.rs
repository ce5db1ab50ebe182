//!
//! This module defines the configuration structures and loading logic for chatmark.
//! Configuration lives in `.chatmark.toml` (or `chatmark.toml`) and is discovered
//! by walking up from the working directory, falling back to the user config directory.

pub mod types;
pub use types::*;

mod loading;
pub use loading::*;

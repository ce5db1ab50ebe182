use std::io;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::image_size::ImageSizer;
use crate::language_resolver::{LanguageResolver, ResolverError};
use crate::viewport::{DEFAULT_IMAGE_OFFSET, DEFAULT_REPLY_OFFSET, DEFAULT_TABLET_SIDEBAR_WIDTH, Viewport};

/// Project-level configuration file names, in lookup order
pub const CONFIG_FILES: &[&str] = &[".chatmark.toml", "chatmark.toml"];

/// Represents the complete configuration loaded from .chatmark.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Code block language settings
    #[serde(default)]
    pub languages: LanguagesConfig,

    /// Inline image sizing
    #[serde(default)]
    pub images: ImagesConfig,

    /// Message editor behaviour
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LanguagesConfig {
    /// Extra aliases (alias -> language key or existing alias)
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ImagesConfig {
    /// Fallback width when no window size is configured (default: 320)
    #[serde(default = "default_image_width")]
    pub default_width: f64,

    /// Window width in points; with `window-height`, enables viewport-based sizing
    #[serde(default)]
    pub window_width: Option<f64>,

    /// Window height in points
    #[serde(default)]
    pub window_height: Option<f64>,

    /// Space taken by avatar and margins (default: 70)
    #[serde(default = "default_image_offset")]
    pub image_offset: f64,

    /// Extra indent for posts in a reply thread (default: 11)
    #[serde(default = "default_reply_offset")]
    pub reply_offset: f64,

    /// Sidebar width on tablets (default: 320)
    #[serde(default = "default_tablet_sidebar_width")]
    pub tablet_sidebar_width: f64,
}

fn default_image_width() -> f64 {
    320.0
}

fn default_image_offset() -> f64 {
    DEFAULT_IMAGE_OFFSET
}

fn default_reply_offset() -> f64 {
    DEFAULT_REPLY_OFFSET
}

fn default_tablet_sidebar_width() -> f64 {
    DEFAULT_TABLET_SIDEBAR_WIDTH
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            default_width: default_image_width(),
            window_width: None,
            window_height: None,
            image_offset: default_image_offset(),
            reply_offset: default_reply_offset(),
            tablet_sidebar_width: default_tablet_sidebar_width(),
        }
    }
}

impl ImagesConfig {
    /// The configured viewport, if both window dimensions are set.
    pub fn viewport(&self) -> Option<Viewport> {
        Some(Viewport {
            window_width: self.window_width?,
            window_height: self.window_height?,
            image_offset: self.image_offset,
            reply_offset: self.reply_offset,
            tablet_sidebar_width: self.tablet_sidebar_width,
        })
    }

    /// Image sizer using the configured viewport, or `default-width` without one.
    pub fn sizer(&self) -> ImageSizer {
        ImageSizer::new(self.viewport(), self.default_width)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EditorConfig {
    /// Switch to a keyboard without smart punctuation inside code blocks (default: true)
    #[serde(default = "default_true")]
    pub code_block_keyboard: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            code_block_keyboard: true,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the TOML content
    #[error("Failed to parse config file at {path}: {source}")]
    ParseError { source: toml::de::Error, path: String },

    /// A value is syntactically valid but out of range
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// A user alias could not be registered
    #[error("Invalid language alias: {0}")]
    InvalidAlias(#[from] ResolverError),

    /// Configuration file already exists
    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

impl Config {
    /// Parse configuration from TOML text. `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::ParseError {
            source,
            path: path.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric ranges the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let images = &self.images;
        positive("images.default-width", Some(images.default_width))?;
        positive("images.window-width", images.window_width)?;
        positive("images.window-height", images.window_height)?;
        non_negative("images.image-offset", images.image_offset)?;
        non_negative("images.reply-offset", images.reply_offset)?;
        non_negative("images.tablet-sidebar-width", images.tablet_sidebar_width)?;

        if images.window_width.is_some() != images.window_height.is_some() {
            return Err(ConfigError::InvalidValue {
                key: "images.window-width".to_string(),
                message: "window-width and window-height must be set together".to_string(),
            });
        }
        Ok(())
    }

    /// Build a language resolver including the configured aliases.
    ///
    /// Aliases pointing at unknown languages are errors; aliases that collide
    /// with built-in names are skipped with a warning.
    pub fn language_resolver(&self) -> Result<LanguageResolver, ConfigError> {
        let mut resolver = LanguageResolver::new();
        for (alias, target) in &self.languages.aliases {
            match resolver.add_alias(alias, target) {
                Ok(()) => {}
                Err(err @ (ResolverError::AliasTaken { .. } | ResolverError::ShadowsCanonical { .. })) => {
                    log::warn!("Ignoring [languages.aliases] entry '{alias}': {err}");
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(resolver)
    }
}

fn positive(key: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v <= 0.0 || !v.is_finite() => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a positive number, got {v}"),
        }),
        _ => Ok(()),
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a non-negative number, got {value}"),
        })
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{CONFIG_FILES, Config, ConfigError};

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults, no file involved
    Default,
    /// Path passed on the command line
    Explicit(PathBuf),
    /// Found by walking up from the working directory
    Project(PathBuf),
    /// Per-user configuration directory
    User(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Explicit(p) | ConfigSource::Project(p) | ConfigSource::User(p) => Some(p),
        }
    }
}

/// A configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Read and parse a single configuration file.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        source,
        path: display.clone(),
    })?;
    Config::from_toml(&content, &display)
}

/// Find the nearest project configuration file, starting at `start` and
/// walking up through its ancestors.
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                log::debug!("Found project config: {}", candidate.display());
                return Some(candidate);
            }
        }
    }
    None
}

/// Location of the per-user configuration file, whether or not it exists.
#[cfg(feature = "native")]
pub fn user_config_path() -> Option<PathBuf> {
    use etcetera::{BaseStrategy, choose_base_strategy};

    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("chatmark").join("chatmark.toml"))
}

#[cfg(not(feature = "native"))]
pub fn user_config_path() -> Option<PathBuf> {
    None
}

/// Resolve the effective configuration.
///
/// Precedence: explicit path, then the nearest project file above `cwd`,
/// then the user configuration, then built-in defaults. `no_config` skips
/// discovery entirely.
pub fn load_config(explicit: Option<&Path>, cwd: &Path, no_config: bool) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        return Ok(LoadedConfig {
            config: load_config_file(path)?,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    if no_config {
        log::debug!("Configuration discovery disabled");
        return Ok(LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Default,
        });
    }

    if let Some(path) = find_project_config(cwd) {
        return Ok(LoadedConfig {
            config: load_config_file(&path)?,
            source: ConfigSource::Project(path),
        });
    }

    if let Some(path) = user_config_path().filter(|p| p.is_file()) {
        log::debug!("Using user config: {}", path.display());
        return Ok(LoadedConfig {
            config: load_config_file(&path)?,
            source: ConfigSource::User(path),
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
        source: ConfigSource::Default,
    })
}

/// Create a default configuration file at the specified path.
///
/// Fails with [`ConfigError::FileExists`] rather than overwriting.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.display().to_string(),
        });
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::IoError {
        source,
        path: path.display().to_string(),
    })
}

/// Commented template written by `chatmark init`
pub const DEFAULT_CONFIG: &str = r#"# chatmark configuration file

[languages]
# Extra code block language aliases (alias = "language key")
# aliases = { rustlang = "rust", gql = "text" }

[images]
# Fallback image width when no window size is known
default-width = 320

# Window size in points; when both are set, the fallback width is derived
# from the shorter side minus the offsets below
# window-width = 390
# window-height = 844

image-offset = 70
reply-offset = 11
tablet-sidebar-width = 320

[editor]
# Use a keyboard without smart punctuation while the cursor is in a code block
code-block-keyboard = true
"#;

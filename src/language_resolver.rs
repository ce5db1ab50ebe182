//! Language alias resolution for fenced code blocks.
//!
//! Maps the token written after a code fence (e.g. "py", "C++", "golang")
//! to the canonical highlight key (e.g. "python", "cpp", "go") and to the
//! label shown above the rendered block.
//!
//! Lookups go through an inverted index built once from [`LANGUAGES`], so
//! resolution is a single hash lookup. An unresolvable token yields an empty
//! string, which callers treat as "no highlighting available".

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use thiserror::Error;

use crate::languages::{LANGUAGES, LanguageEntry};

/// Errors raised when registering user-defined aliases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("alias '{alias}' targets unknown language '{target}'")]
    UnknownTarget { alias: String, target: String },

    #[error("alias '{alias}' is already a canonical language key")]
    ShadowsCanonical { alias: String },

    #[error("alias '{alias}' already resolves to '{existing}', cannot remap it to '{target}'")]
    AliasTaken {
        alias: String,
        existing: &'static str,
        target: &'static str,
    },

    #[error("alias must not be empty")]
    EmptyAlias,
}

/// Resolver for language tokens to canonical highlight keys.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    /// Canonical key -> entry
    keys: HashMap<&'static str, &'static LanguageEntry>,
    /// Alias -> entry (built-in aliases plus user registrations)
    aliases: HashMap<String, &'static LanguageEntry>,
    /// Extension -> entry
    extensions: HashMap<&'static str, &'static LanguageEntry>,
    /// User-registered aliases, in registration order
    user_aliases: IndexMap<String, &'static str>,
}

impl LanguageResolver {
    /// Create a resolver over the built-in language table.
    pub fn new() -> Self {
        let mut keys = HashMap::with_capacity(LANGUAGES.len());
        let mut aliases: HashMap<String, &'static LanguageEntry> = HashMap::new();
        let mut extensions = HashMap::new();

        for entry in LANGUAGES {
            keys.insert(entry.key, entry);

            for alias in entry.aliases {
                match aliases.get(*alias) {
                    Some(existing) => {
                        // Table order decides; the later claim is ignored
                        log::debug!(
                            "Alias '{}' claimed by both '{}' and '{}', keeping '{}'",
                            alias,
                            existing.key,
                            entry.key,
                            existing.key
                        );
                    }
                    None => {
                        aliases.insert((*alias).to_string(), entry);
                    }
                }
            }

            for ext in entry.extensions {
                extensions.entry(*ext).or_insert(entry);
            }
        }

        Self {
            keys,
            aliases,
            extensions,
            user_aliases: IndexMap::new(),
        }
    }

    /// Create a resolver extended with user aliases (alias -> target).
    ///
    /// The target may be a canonical key or any alias already known.
    pub fn with_aliases<'a, I>(aliases: I) -> Result<Self, ResolverError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut resolver = Self::new();
        for (alias, target) in aliases {
            resolver.add_alias(alias, target)?;
        }
        Ok(resolver)
    }

    /// Register an additional alias.
    ///
    /// Re-registering an alias for the language it already resolves to is a no-op.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<(), ResolverError> {
        let alias = alias.trim().to_lowercase();
        if alias.is_empty() {
            return Err(ResolverError::EmptyAlias);
        }

        let entry = self.resolve_entry(target).ok_or_else(|| ResolverError::UnknownTarget {
            alias: alias.clone(),
            target: target.to_string(),
        })?;

        if self.keys.contains_key(alias.as_str()) {
            if self.keys[alias.as_str()].key == entry.key {
                return Ok(());
            }
            return Err(ResolverError::ShadowsCanonical { alias });
        }

        if let Some(existing) = self.aliases.get(&alias) {
            if existing.key == entry.key {
                return Ok(());
            }
            return Err(ResolverError::AliasTaken {
                alias,
                existing: existing.key,
                target: entry.key,
            });
        }

        log::debug!("Registered alias '{}' -> '{}'", alias, entry.key);
        self.user_aliases.insert(alias.clone(), entry.key);
        self.aliases.insert(alias, entry);
        Ok(())
    }

    /// Resolve a token to its table entry.
    pub fn resolve_entry(&self, token: &str) -> Option<&'static LanguageEntry> {
        let lower = token.to_lowercase();
        self.keys
            .get(lower.as_str())
            .or_else(|| self.aliases.get(&lower))
            .copied()
    }

    /// Resolve a language name or alias to its canonical key.
    ///
    /// Returns an empty string when the token is unknown.
    pub fn resolve(&self, token: &str) -> String {
        self.resolve_entry(token)
            .map(|e| e.key.to_string())
            .unwrap_or_default()
    }

    /// Display name for a language name or alias, empty when unknown.
    pub fn display_name(&self, token: &str) -> String {
        self.resolve_entry(token)
            .map(|e| e.display_name.to_string())
            .unwrap_or_default()
    }

    /// Resolve a file extension ("rs", ".RS") to its canonical key, empty when unknown.
    pub fn language_for_extension(&self, ext: &str) -> String {
        let lower = ext.to_lowercase();
        let ext = lower.strip_prefix('.').unwrap_or(&lower);
        self.extensions
            .get(ext)
            .map(|e| e.key.to_string())
            .unwrap_or_default()
    }

    /// Check if a token resolves to any language.
    pub fn is_known(&self, token: &str) -> bool {
        self.resolve_entry(token).is_some()
    }

    /// Aliases registered on top of the built-in table, in registration order.
    pub fn user_aliases(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.user_aliases.iter().map(|(a, k)| (a.as_str(), *k))
    }

    /// All languages known to this resolver, in table order.
    pub fn entries(&self) -> impl Iterator<Item = &'static LanguageEntry> {
        LANGUAGES.iter()
    }
}

impl Default for LanguageResolver {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_RESOLVER: LazyLock<LanguageResolver> = LazyLock::new(LanguageResolver::new);

/// Resolve a language name or alias to its canonical key ("" when unknown).
pub fn resolve_language(token: &str) -> String {
    DEFAULT_RESOLVER.resolve(token)
}

/// Display name for a language name or alias ("" when unknown).
pub fn display_name(token: &str) -> String {
    DEFAULT_RESOLVER.display_name(token)
}

/// Canonical key for a file extension ("" when unknown).
pub fn language_for_extension(ext: &str) -> String {
    DEFAULT_RESOLVER.language_for_extension(ext)
}

//! Configuration for the copy feature.
//!
//! Owned by the host's settings store; the core only reads it. Construction
//! goes through [`CopyConfigBuilder`], which validates on `build()`. The
//! validity predicate mirrors the settings panel's field dependencies: a
//! strategy field only has to be usable when link copying is enabled.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How the path segment of a copied link is derived.
///
/// A closed sum type, each case carrying only the fields its algorithm
/// needs; invalid field/strategy combinations are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "behavior", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LinkStrategy {
    /// A literal folder name, the same for every note.
    FixedFolder {
        #[serde(default)]
        folder: String,
    },
    /// A front-matter key whose value names the folder, with a fallback
    /// folder when the key is missing or empty.
    CategoryKey {
        #[serde(default)]
        key: String,
        #[serde(default)]
        default_folder: String,
    },
    /// The note's vault-relative folder path. With `folder_note` set, a note
    /// named after its containing folder uses the parent folder's path
    /// instead, so the folder name is not duplicated in the link.
    ObsidianPath {
        #[serde(default)]
        folder_note: bool,
    },
}

impl LinkStrategy {
    /// Whether this is the vault-path strategy (the guard treats documents
    /// without front matter specially under it).
    pub fn is_obsidian_path(&self) -> bool {
        matches!(self, LinkStrategy::ObsidianPath { .. })
    }
}

impl Default for LinkStrategy {
    fn default() -> Self {
        LinkStrategy::CategoryKey {
            key: String::new(),
            default_folder: String::new(),
        }
    }
}

/// Polarity of the per-document activation marker key.
///
/// The original plugin overloaded one toggle (`comport`) to invert the
/// meaning of its disable key; the two modes are spelled out here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivationPolicy {
    /// Copy is available unless the marker key is truthy (per-document
    /// opt-out).
    #[default]
    OptOut,
    /// Copy is unavailable unless the marker key is truthy (per-document
    /// opt-in).
    OptIn,
}

/// The full configuration record the core reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyConfig {
    /// Front-matter keys offered by the picker; empty means all keys.
    pub copy_keys: Vec<String>,
    /// Site root prepended to every constructed link. Trusted as configured,
    /// never validated as a URL.
    pub base_link: String,
    /// Path-segment derivation for constructed links.
    pub link_strategy: LinkStrategy,
    /// Polarity of the activation marker.
    pub activation: ActivationPolicy,
    /// Front-matter key consulted by the activation guard.
    pub marker_key: String,
    /// Prefer a front-matter title over the note name.
    pub use_frontmatter_title: bool,
    /// Front-matter key holding the title when `use_frontmatter_title`.
    pub title_key: String,
    /// Pattern applied to the title; empty disables rewriting.
    pub title_regex: String,
    /// Replacement for `title_regex` matches.
    pub title_replace: String,
    /// Literal substrings stripped from the assembled link, in order.
    pub remove_link_parts: Vec<String>,
    /// Whether the synthetic "copy as link" entry is offered at all.
    pub enable_copy_link: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            copy_keys: vec![],
            base_link: String::new(),
            link_strategy: LinkStrategy::default(),
            activation: ActivationPolicy::OptOut,
            marker_key: String::new(),
            use_frontmatter_title: false,
            title_key: "title".to_string(),
            title_regex: String::new(),
            title_replace: String::new(),
            remove_link_parts: vec![],
            enable_copy_link: false,
        }
    }
}

impl CopyConfig {
    /// Create a builder over the default configuration.
    pub fn builder() -> CopyConfigBuilder {
        CopyConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// `title_regex` must compile whenever it is set. Strategy fields are
    /// only checked when `enable_copy_link` is on, matching the settings
    /// panel where those fields are hidden otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.title_regex.is_empty() {
            Regex::new(&self.title_regex).map_err(|e| {
                Error::config_error(format!(
                    "invalid title pattern `{}`: {e}",
                    self.title_regex
                ))
            })?;
        }

        if self.enable_copy_link {
            match &self.link_strategy {
                LinkStrategy::FixedFolder { folder } if folder.is_empty() => {
                    return Err(Error::config_error(
                        "fixed-folder strategy requires a folder name",
                    ));
                }
                LinkStrategy::CategoryKey { key, .. } if key.is_empty() => {
                    return Err(Error::config_error(
                        "category-key strategy requires a front-matter key",
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Builder for [`CopyConfig`].
#[derive(Debug, Default)]
pub struct CopyConfigBuilder {
    config: CopyConfig,
}

impl CopyConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keys offered by the picker.
    pub fn copy_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.copy_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the site root for constructed links.
    pub fn base_link(mut self, base: impl Into<String>) -> Self {
        self.config.base_link = base.into();
        self
    }

    /// Set the path-segment strategy.
    pub fn link_strategy(mut self, strategy: LinkStrategy) -> Self {
        self.config.link_strategy = strategy;
        self
    }

    /// Set the activation polarity and its marker key.
    pub fn activation(mut self, policy: ActivationPolicy, marker_key: impl Into<String>) -> Self {
        self.config.activation = policy;
        self.config.marker_key = marker_key.into();
        self
    }

    /// Take titles from the given front-matter key instead of the note name.
    pub fn frontmatter_title(mut self, title_key: impl Into<String>) -> Self {
        self.config.use_frontmatter_title = true;
        self.config.title_key = title_key.into();
        self
    }

    /// Rewrite titles: replace all `pattern` matches with `replace`.
    pub fn title_rewrite(mut self, pattern: impl Into<String>, replace: impl Into<String>) -> Self {
        self.config.title_regex = pattern.into();
        self.config.title_replace = replace.into();
        self
    }

    /// Set the literal substrings stripped from assembled links.
    pub fn remove_link_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.remove_link_parts = parts.into_iter().map(Into::into).collect();
        self
    }

    /// Offer the synthetic "copy as link" entry.
    pub fn enable_copy_link(mut self, enabled: bool) -> Self {
        self.config.enable_copy_link = enabled;
        self
    }

    /// Build and validate.
    pub fn build(self) -> Result<CopyConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

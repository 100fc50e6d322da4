//! Configuration types for fitroom.
//!
//! [`Config::load`] reads `~/.config/fitroom/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The optional `[lexicon]` section replaces the built-in keyword tables.
//! Tables are TOML arrays of tables so that their order, which decides
//! first-match ties, survives parsing:
//!
//! ```toml
//! [[lexicon.colors]]
//! name     = "blue"
//! variants = ["blue", "navy", "cobalt"]
//!
//! [[lexicon.categories]]
//! keyword  = "tee"
//! category = "T-shirts & Polos"
//! ```

use crate::error::LexiconError;
use crate::interpreter::QueryInterpreter;
use crate::lexicon::Lexicon;
use crate::types::FieldMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
result_limit  = 10
summary_count = 5

[fields]
primary_color   = "colors.primary"
secondary_color = "colors.secondary"
title           = "product_name"
category        = "subcategory"

[closet]
recent_count = 3
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fitroom/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fields: FieldMap,
    #[serde(default)]
    pub closet: ClosetConfig,
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Ceiling on documents returned per search.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// How many matches are written to the log after each search.
    #[serde(default = "default_summary_count")]
    pub summary_count: usize,
}

fn default_result_limit() -> usize { 10 }
fn default_summary_count() -> usize { 5 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            summary_count: default_summary_count(),
        }
    }
}

/// `[closet]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosetConfig {
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_recent_count() -> usize { 3 }

impl Default for ClosetConfig {
    fn default() -> Self {
        Self { recent_count: default_recent_count() }
    }
}

/// `[lexicon]` section. Either table may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub colors: Option<Vec<ColorRow>>,
    #[serde(default)]
    pub categories: Option<Vec<CategoryRow>>,
}

/// One `[[lexicon.colors]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorRow {
    pub name: String,
    pub variants: Vec<String>,
}

/// One `[[lexicon.categories]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub keyword: String,
    pub category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fitroom/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load a specific file on top of the built-in defaults. The file must
    /// exist and is read as TOML whatever its extension.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML string on top of the built-in defaults.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The active lexicon: the configured tables, or the built-in ones.
    pub fn lexicon(&self) -> Result<Lexicon, LexiconError> {
        match &self.lexicon {
            Some(cfg) => Lexicon::from_config(cfg),
            None => Ok(Lexicon::builtin()),
        }
    }

    /// An interpreter over [`Config::lexicon`] and the `[fields]` section.
    pub fn interpreter(&self) -> Result<QueryInterpreter, LexiconError> {
        Ok(QueryInterpreter::new(self.lexicon()?, self.fields.clone()))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fitroom")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

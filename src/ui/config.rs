//! # Configuration Persistence
//!
//! User configuration stored in `config.json` in the platform config
//! directory (`~/.config/symboldrop/config.json` on Linux).
//!
//! ```json
//! {
//!   "theme": "Nord",
//!   "glyph_file": "/Users/me/sf-symbols-unicode.json"
//! }
//! ```
//!
//! `glyph_file` points at a `[name, glyph]` pair array that replaces the
//! bundled glyph mapping. The `--glyphs` flag takes precedence over it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Replacement glyph mapping file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph_file: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            glyph_file: None,
        }
    }
}

impl Config {
    /// Load configuration from disk. Falls back to `Config::default()` if the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            warn!("Using default configuration: {:#}", e);
            Self::default()
        })
    }

    fn try_load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Location of `config.json` in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "symboldrop")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

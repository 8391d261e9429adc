//! # Preference Storage
//!
//! The [`PreferenceStore`] trait and its file-backed and in-memory
//! implementations.

use crate::browser::CopyFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Maximum number of recently copied symbols kept
pub const MAX_RECENT_SYMBOLS: usize = 20;

/// Persisted preference document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Recently copied symbol names, most recent first
    #[serde(rename = "recentSymbolIDs", default)]
    pub recent_symbol_ids: Vec<String>,
    /// Favorite symbol names
    #[serde(rename = "favoriteSymbolIDs", default)]
    pub favorite_symbol_ids: Vec<String>,
    /// Raw copy format value; anything unparseable reads as the default
    #[serde(
        rename = "copyFormat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub copy_format: Option<String>,
}

impl Preferences {
    pub fn copy_format(&self) -> CopyFormat {
        self.copy_format
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    fn favorite_set(&self) -> HashSet<String> {
        self.favorite_symbol_ids.iter().cloned().collect()
    }

    fn set_favorites(&mut self, ids: &HashSet<String>) {
        let mut sorted: Vec<String> = ids.iter().cloned().collect();
        sorted.sort();
        self.favorite_symbol_ids = sorted;
    }
}

/// Get/set access to the persisted preferences.
///
/// Setters persist immediately; an `Err` means the value was not saved.
pub trait PreferenceStore {
    fn recent_ids(&self) -> Vec<String>;
    fn set_recent_ids(&mut self, ids: &[String]) -> Result<()>;

    fn favorite_ids(&self) -> HashSet<String>;
    fn set_favorite_ids(&mut self, ids: &HashSet<String>) -> Result<()>;

    fn copy_format(&self) -> CopyFormat;
    fn set_copy_format(&mut self, format: CopyFormat) -> Result<()>;
}

/// Preferences stored as JSON in the platform data directory
#[derive(Debug)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl JsonPreferenceStore {
    /// Open the store at the default location
    ///
    /// Existing preferences are loaded if present and readable.
    pub fn new() -> Result<Self> {
        let path = get_preferences_path()?;
        Ok(Self::with_path(path))
    }

    /// Open the store backed by a specific file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = if path.exists() {
            load_preferences(&path).unwrap_or_else(|e| {
                warn!("Ignoring unreadable preferences: {:#}", e);
                Preferences::default()
            })
        } else {
            Preferences::default()
        };

        Self { path, prefs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "Failed to create preferences directory: {}",
                    parent.display()
                )
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.prefs).context("Failed to serialize preferences")?;

        fs::write(&self.path, json).with_context(|| {
            format!("Failed to write preferences file: {}", self.path.display())
        })?;

        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn recent_ids(&self) -> Vec<String> {
        self.prefs.recent_symbol_ids.clone()
    }

    fn set_recent_ids(&mut self, ids: &[String]) -> Result<()> {
        self.prefs.recent_symbol_ids = ids.to_vec();
        self.save()
    }

    fn favorite_ids(&self) -> HashSet<String> {
        self.prefs.favorite_set()
    }

    fn set_favorite_ids(&mut self, ids: &HashSet<String>) -> Result<()> {
        self.prefs.set_favorites(ids);
        self.save()
    }

    fn copy_format(&self) -> CopyFormat {
        self.prefs.copy_format()
    }

    fn set_copy_format(&mut self, format: CopyFormat) -> Result<()> {
        self.prefs.copy_format = Some(format.id().to_string());
        self.save()
    }
}

/// In-memory store. Clones share the same preferences, so a test can keep
/// a handle and inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    inner: Rc<RefCell<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    prefs: Preferences,
    writes: usize,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `prefs`
    pub fn with_preferences(prefs: Preferences) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryState {
                prefs,
                ..MemoryState::default()
            })),
        }
    }

    /// Store whose setters always fail
    pub fn failing() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryState {
                fail_writes: true,
                ..MemoryState::default()
            })),
        }
    }

    /// Snapshot of the stored preferences
    pub fn preferences(&self) -> Preferences {
        self.inner.borrow().prefs.clone()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    fn write(&self, update: impl FnOnce(&mut Preferences)) -> Result<()> {
        let mut state = self.inner.borrow_mut();
        if state.fail_writes {
            anyhow::bail!("Preference store is read-only");
        }
        update(&mut state.prefs);
        state.writes += 1;
        Ok(())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn recent_ids(&self) -> Vec<String> {
        self.inner.borrow().prefs.recent_symbol_ids.clone()
    }

    fn set_recent_ids(&mut self, ids: &[String]) -> Result<()> {
        self.write(|prefs| prefs.recent_symbol_ids = ids.to_vec())
    }

    fn favorite_ids(&self) -> HashSet<String> {
        self.inner.borrow().prefs.favorite_set()
    }

    fn set_favorite_ids(&mut self, ids: &HashSet<String>) -> Result<()> {
        self.write(|prefs| prefs.set_favorites(ids))
    }

    fn copy_format(&self) -> CopyFormat {
        self.inner.borrow().prefs.copy_format()
    }

    fn set_copy_format(&mut self, format: CopyFormat) -> Result<()> {
        self.write(|prefs| prefs.copy_format = Some(format.id().to_string()))
    }
}

/// Get the platform data directory path for the preferences file
fn get_preferences_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "symboldrop")
        .context("Failed to determine application data directory")?;

    Ok(proj_dirs.data_dir().join("preferences.json"))
}

/// Load preferences from a file
fn load_preferences(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;

    let prefs: Preferences = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?;

    Ok(prefs)
}

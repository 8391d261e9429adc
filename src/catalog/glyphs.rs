//! # Glyph Lookup
//!
//! Maps symbol names to the Unicode glyph that renders them.
//!
//! The mapping comes from a JSON array of `[name, glyph]` pairs:
//!
//! ```json
//! [
//!   ["star.fill", "★"],
//!   ["heart.fill", "♥"]
//! ]
//! ```
//!
//! The table is parsed on first lookup and kept for the lifetime of the
//! [`GlyphTable`]. A missing file, invalid JSON, or a pair with the wrong
//! number of elements never fails a lookup: the affected names simply have
//! no glyph.

use anyhow::{Context, Result};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Glyph mapping shipped with the binary.
const BUNDLED_GLYPHS: &str = include_str!("../../assets/glyphs.json");

#[derive(Debug, Clone)]
enum GlyphSource {
    Bundled,
    File(PathBuf),
    Json(String),
    Empty,
}

/// Lazily built name → glyph table.
#[derive(Debug)]
pub struct GlyphTable {
    source: GlyphSource,
    table: OnceCell<HashMap<String, String>>,
}

impl GlyphTable {
    /// Table backed by the glyph mapping compiled into the binary.
    pub fn bundled() -> Self {
        Self::with_source(GlyphSource::Bundled)
    }

    /// Table backed by a user-supplied mapping file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_source(GlyphSource::File(path.into()))
    }

    /// Table backed by an in-memory JSON document.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self::with_source(GlyphSource::Json(json.into()))
    }

    /// Table with no mappings at all.
    pub fn empty() -> Self {
        Self::with_source(GlyphSource::Empty)
    }

    fn with_source(source: GlyphSource) -> Self {
        Self {
            source,
            table: OnceCell::new(),
        }
    }

    /// Look up the glyph for a symbol name.
    pub fn glyph(&self, name: &str) -> Option<&str> {
        self.table().get(name).map(String::as_str)
    }

    /// Number of mapped names.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> &HashMap<String, String> {
        self.table.get_or_init(|| {
            let table = self.load();
            debug!(entries = table.len(), "glyph table loaded");
            table
        })
    }

    fn load(&self) -> HashMap<String, String> {
        let result = match &self.source {
            GlyphSource::Bundled => parse_pairs(BUNDLED_GLYPHS),
            GlyphSource::File(path) => load_file(path),
            GlyphSource::Json(json) => parse_pairs(json),
            GlyphSource::Empty => Ok(HashMap::new()),
        };

        result.unwrap_or_else(|e| {
            warn!("Glyph mapping unavailable, falling back to names: {:#}", e);
            HashMap::new()
        })
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::bundled()
    }
}

fn load_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read glyph file: {}", path.display()))?;
    parse_pairs(&content).with_context(|| format!("Failed to parse glyph file: {}", path.display()))
}

/// Parse an array of `[name, glyph]` pairs, skipping pairs of any other arity.
fn parse_pairs(json: &str) -> Result<HashMap<String, String>> {
    let pairs: Vec<Vec<String>> =
        serde_json::from_str(json).context("Expected an array of [name, glyph] pairs")?;

    let table = pairs
        .into_iter()
        .filter_map(|pair| match <[String; 2]>::try_from(pair) {
            Ok([name, glyph]) => Some((name, glyph)),
            Err(_) => None,
        })
        .collect();

    Ok(table)
}

use crate::browser::format::CopyFormat;
use crate::browser::indicator::CopyIndicator;
use crate::catalog::{Category, GlyphTable, Symbol, SymbolCatalog};
use crate::clipboard::Clipboard;
use crate::prefs::{PreferenceStore, MAX_RECENT_SYMBOLS};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, warn};

/// Browsing state behind the symbol grid.
///
/// Owns the transient UI state (search text, selected category, copied
/// indicator) and the in-memory copies of the persisted preferences. Every
/// preference change is written through to the store at once; a failed
/// write is logged and returned but the in-memory state keeps the change.
pub struct SymbolBrowser {
    catalog: SymbolCatalog,
    glyphs: GlyphTable,
    store: Box<dyn PreferenceStore>,
    clipboard: Box<dyn Clipboard>,

    pub search_text: String,
    pub selected_category: Category,

    recent_ids: Vec<String>,
    favorite_ids: HashSet<String>,
    copy_format: CopyFormat,
    indicator: CopyIndicator,
}

impl SymbolBrowser {
    pub fn new(
        catalog: SymbolCatalog,
        glyphs: GlyphTable,
        store: Box<dyn PreferenceStore>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let recent_ids = store.recent_ids();
        let favorite_ids = store.favorite_ids();
        let copy_format = store.copy_format();

        Self {
            catalog,
            glyphs,
            store,
            clipboard,
            search_text: String::new(),
            selected_category: Category::All,
            recent_ids,
            favorite_ids,
            copy_format,
            indicator: CopyIndicator::new(),
        }
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn categories(&self) -> &'static [Category] {
        self.catalog.categories()
    }

    /// Symbols matching the selected category and the search text.
    pub fn filtered_symbols(&self) -> Vec<&Symbol> {
        let by_category: Vec<&Symbol> = match self.selected_category {
            Category::Recent => self
                .recent_ids
                .iter()
                .filter_map(|id| self.catalog.get(id))
                .collect(),
            Category::Favorites => self
                .catalog
                .symbols()
                .iter()
                .filter(|s| self.favorite_ids.contains(&s.name))
                .collect(),
            Category::All => self.catalog.symbols().iter().collect(),
            category => self
                .catalog
                .symbols()
                .iter()
                .filter(|s| s.category == category)
                .collect(),
        };

        if self.search_text.is_empty() {
            return by_category;
        }

        let query = self.search_text.to_lowercase();
        by_category
            .into_iter()
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn symbol_count(&self) -> usize {
        self.filtered_symbols().len()
    }

    pub fn select_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// The text a copy of `symbol` would put on the clipboard right now.
    pub fn render(&self, symbol: &Symbol) -> String {
        self.copy_format.render(symbol, &self.glyphs)
    }

    /// Copy `symbol` in the active format.
    pub fn copy(&mut self, symbol: &Symbol) -> Result<()> {
        self.copy_as(symbol, self.copy_format)
    }

    /// Copy `symbol` in `format`, leaving the active format untouched.
    pub fn copy_as(&mut self, symbol: &Symbol, format: CopyFormat) -> Result<()> {
        let text = format.render(symbol, &self.glyphs);
        self.copy_text(symbol, &text)
    }

    /// Copy the bare name of `symbol`, whatever the active format.
    pub fn copy_name(&mut self, symbol: &Symbol) -> Result<()> {
        self.copy_text(symbol, &symbol.name)
    }

    fn copy_text(&mut self, symbol: &Symbol, text: &str) -> Result<()> {
        let written = self
            .clipboard
            .set_text(text)
            .with_context(|| format!("Failed to copy {}", symbol.name));

        match &written {
            Ok(()) => debug!(symbol = %symbol.name, text, "copied"),
            Err(e) => warn!("{:#}", e),
        }

        let saved = self.add_to_recents(symbol);
        self.indicator.mark(&symbol.name, Instant::now());

        written.and(saved)
    }

    fn add_to_recents(&mut self, symbol: &Symbol) -> Result<()> {
        self.recent_ids.retain(|id| id != &symbol.name);
        self.recent_ids.insert(0, symbol.name.clone());
        self.recent_ids.truncate(MAX_RECENT_SYMBOLS);

        self.store.set_recent_ids(&self.recent_ids).inspect_err(|e| {
            warn!("Failed to save recent symbols: {:#}", e);
        })
    }

    /// Recently copied symbol ids, most recent first.
    pub fn recent_ids(&self) -> &[String] {
        &self.recent_ids
    }

    pub fn favorite_ids(&self) -> &HashSet<String> {
        &self.favorite_ids
    }

    pub fn is_favorite(&self, symbol: &Symbol) -> bool {
        self.favorite_ids.contains(&symbol.name)
    }

    pub fn toggle_favorite(&mut self, symbol: &Symbol) -> Result<()> {
        if !self.favorite_ids.remove(&symbol.name) {
            self.favorite_ids.insert(symbol.name.clone());
        }

        self.store
            .set_favorite_ids(&self.favorite_ids)
            .inspect_err(|e| warn!("Failed to save favorites: {:#}", e))
    }

    pub fn copy_format(&self) -> CopyFormat {
        self.copy_format
    }

    pub fn set_copy_format(&mut self, format: CopyFormat) -> Result<()> {
        self.copy_format = format;
        self.store
            .set_copy_format(format)
            .inspect_err(|e| warn!("Failed to save copy format: {:#}", e))
    }

    /// Other symbols in the same family as `symbol`, in catalog order.
    ///
    /// The family of `star.fill` is `star` and every `star.*` symbol.
    pub fn related_symbols(&self, symbol: &Symbol) -> Vec<&Symbol> {
        let base = symbol.base_name();
        let prefix = format!("{}.", base);

        self.catalog
            .symbols()
            .iter()
            .filter(|other| {
                other.name != symbol.name && (other.name == base || other.name.starts_with(&prefix))
            })
            .collect()
    }

    pub fn has_related(&self, symbol: &Symbol) -> bool {
        !self.related_symbols(symbol).is_empty()
    }

    /// Id of the symbol currently shown as copied.
    pub fn last_copied(&self) -> Option<&str> {
        self.indicator.last_copied()
    }

    pub fn is_copied(&self, symbol: &Symbol) -> bool {
        self.indicator.is_copied(&symbol.name)
    }

    /// A scheduled indicator clear for `symbol_id` firing.
    pub fn expire_copied(&mut self, symbol_id: &str) -> bool {
        self.indicator.expire(symbol_id)
    }

    /// When the next scheduled indicator clear is due.
    pub fn next_clear(&self) -> Option<Instant> {
        self.indicator.next_due()
    }

    /// Fire every indicator clear due by `now`. Returns whether anything
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.indicator.fire_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::prefs::{MemoryPreferenceStore, Preferences};
    use std::time::Duration;

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::from_symbols([
            Symbol::new("star", Category::General),
            Symbol::new("star.fill", Category::General),
            Symbol::new("heart", Category::Health),
            Symbol::new("star.circle", Category::Shapes),
            Symbol::new("starburst", Category::Shapes),
            Symbol::new("heart.fill", Category::Health),
        ])
    }

    fn browser_with(
        store: MemoryPreferenceStore,
        clipboard: MemoryClipboard,
    ) -> SymbolBrowser {
        SymbolBrowser::new(
            catalog(),
            GlyphTable::from_json(r#"[["star.fill", "★"]]"#),
            Box::new(store),
            Box::new(clipboard),
        )
    }

    fn browser() -> SymbolBrowser {
        browser_with(MemoryPreferenceStore::new(), MemoryClipboard::new())
    }

    fn names(symbols: &[&Symbol]) -> Vec<String> {
        symbols.iter().map(|s| s.name.clone()).collect()
    }

    fn sym(browser: &SymbolBrowser, name: &str) -> Symbol {
        browser.catalog().get(name).cloned().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let browser = browser();
        assert!(browser.search_text.is_empty());
        assert_eq!(browser.selected_category, Category::All);
        assert_eq!(browser.last_copied(), None);
        assert_eq!(browser.copy_format(), CopyFormat::Unicode);
    }

    #[test]
    fn test_loads_preferences_from_store() {
        let store = MemoryPreferenceStore::with_preferences(Preferences {
            recent_symbol_ids: vec!["heart".to_string()],
            favorite_symbol_ids: vec!["star".to_string()],
            copy_format: Some("code-snippet".to_string()),
        });
        let browser = browser_with(store, MemoryClipboard::new());

        assert_eq!(browser.recent_ids(), ["heart"]);
        assert!(browser.favorite_ids().contains("star"));
        assert_eq!(browser.copy_format(), CopyFormat::CodeSnippet);
    }

    #[test]
    fn test_recent_projection_keeps_recency_and_drops_unknown() {
        let store = MemoryPreferenceStore::with_preferences(Preferences {
            recent_symbol_ids: vec![
                "heart".to_string(),
                "removed.symbol".to_string(),
                "star".to_string(),
            ],
            ..Preferences::default()
        });
        let mut browser = browser_with(store, MemoryClipboard::new());
        browser.select_category(Category::Recent);

        assert_eq!(names(&browser.filtered_symbols()), vec!["heart", "star"]);
    }

    #[test]
    fn test_favorites_in_catalog_order() {
        let mut browser = browser();
        let heart = sym(&browser, "heart");
        let star = sym(&browser, "star");
        browser.toggle_favorite(&heart).unwrap();
        browser.toggle_favorite(&star).unwrap();

        browser.select_category(Category::Favorites);
        assert_eq!(names(&browser.filtered_symbols()), vec!["star", "heart"]);
    }

    #[test]
    fn test_search_applies_within_meta_categories() {
        let mut browser = browser();
        let heart = sym(&browser, "heart");
        let star = sym(&browser, "star");
        browser.copy(&star).unwrap();
        browser.copy(&heart).unwrap();

        browser.select_category(Category::Recent);
        browser.set_search_text("STA");
        assert_eq!(names(&browser.filtered_symbols()), vec!["star"]);

        browser.clear_search();
        assert_eq!(names(&browser.filtered_symbols()), vec!["heart", "star"]);
    }

    #[test]
    fn test_copy_writes_rendered_text() {
        let clipboard = MemoryClipboard::new();
        let mut browser = browser_with(MemoryPreferenceStore::new(), clipboard.clone());
        let star_fill = sym(&browser, "star.fill");
        let heart = sym(&browser, "heart");

        browser.copy(&star_fill).unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("★"));

        browser.copy(&heart).unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("heart"));

        browser.set_copy_format(CopyFormat::CodeSnippet).unwrap();
        browser.copy(&heart).unwrap();
        assert_eq!(
            clipboard.text().as_deref(),
            Some(r#"Image(systemName: "heart")"#)
        );
    }

    #[test]
    fn test_copy_name_ignores_format() {
        let clipboard = MemoryClipboard::new();
        let mut browser = browser_with(MemoryPreferenceStore::new(), clipboard.clone());
        let star_fill = sym(&browser, "star.fill");

        browser.copy_name(&star_fill).unwrap();
        assert_eq!(clipboard.text().as_deref(), Some("star.fill"));
        assert_eq!(browser.recent_ids(), ["star.fill"]);
        assert!(browser.is_copied(&star_fill));
    }

    #[test]
    fn test_copy_as_does_not_change_active_format() {
        let clipboard = MemoryClipboard::new();
        let mut browser = browser_with(MemoryPreferenceStore::new(), clipboard.clone());
        let star_fill = sym(&browser, "star.fill");

        browser.copy_as(&star_fill, CopyFormat::CodeSnippet).unwrap();
        assert_eq!(
            clipboard.text().as_deref(),
            Some(r#"Image(systemName: "star.fill")"#)
        );
        assert_eq!(browser.copy_format(), CopyFormat::Unicode);
    }

    #[test]
    fn test_copy_promotes_to_front_without_duplicates() {
        let store = MemoryPreferenceStore::new();
        let mut browser = browser_with(store.clone(), MemoryClipboard::new());
        let star = sym(&browser, "star");
        let heart = sym(&browser, "heart");

        browser.copy(&star).unwrap();
        browser.copy(&heart).unwrap();
        browser.copy(&star).unwrap();

        assert_eq!(browser.recent_ids(), ["star", "heart"]);
        assert_eq!(store.preferences().recent_symbol_ids, vec!["star", "heart"]);
        assert_eq!(store.writes(), 3);
    }

    #[test]
    fn test_clipboard_failure_still_records_copy() {
        let mut browser = browser_with(MemoryPreferenceStore::new(), MemoryClipboard::unavailable());
        let star = sym(&browser, "star");

        let result = browser.copy(&star);
        assert!(result.is_err());
        assert_eq!(browser.recent_ids(), ["star"]);
        assert!(browser.is_copied(&star));
    }

    #[test]
    fn test_store_failure_keeps_in_memory_state() {
        let clipboard = MemoryClipboard::new();
        let mut browser = browser_with(MemoryPreferenceStore::failing(), clipboard.clone());
        let star = sym(&browser, "star");

        assert!(browser.toggle_favorite(&star).is_err());
        assert!(browser.is_favorite(&star));

        assert!(browser.copy(&star).is_err());
        assert_eq!(clipboard.text().as_deref(), Some("star"));
        assert_eq!(browser.recent_ids(), ["star"]);

        assert!(browser.set_copy_format(CopyFormat::SymbolName).is_err());
        assert_eq!(browser.copy_format(), CopyFormat::SymbolName);
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let store = MemoryPreferenceStore::new();
        let mut browser = browser_with(store.clone(), MemoryClipboard::new());
        let heart = sym(&browser, "heart");

        assert!(!browser.is_favorite(&heart));
        browser.toggle_favorite(&heart).unwrap();
        assert!(browser.is_favorite(&heart));
        assert_eq!(store.preferences().favorite_symbol_ids, vec!["heart"]);

        browser.toggle_favorite(&heart).unwrap();
        assert!(!browser.is_favorite(&heart));
        assert!(store.preferences().favorite_symbol_ids.is_empty());
    }

    #[test]
    fn test_related_symbols() {
        let browser = browser();
        let star_fill = sym(&browser, "star.fill");

        let related = browser.related_symbols(&star_fill);
        assert_eq!(names(&related), vec!["star", "star.circle"]);
        assert!(browser.has_related(&star_fill));
    }

    #[test]
    fn test_related_requires_separator() {
        let browser = browser();
        let star = sym(&browser, "star");

        // "starburst" shares the prefix but not the family
        let related = browser.related_symbols(&star);
        assert_eq!(names(&related), vec!["star.fill", "star.circle"]);
    }

    #[test]
    fn test_no_related_symbols() {
        let browser = browser();
        let starburst = sym(&browser, "starburst");
        assert!(browser.related_symbols(&starburst).is_empty());
        assert!(!browser.has_related(&starburst));
    }

    #[test]
    fn test_superseded_copy_keeps_indicator() {
        let mut browser = browser();
        let star = sym(&browser, "star");
        let heart = sym(&browser, "heart");

        browser.copy(&star).unwrap();
        browser.copy(&heart).unwrap();

        // star's clear fires after heart was copied
        assert!(!browser.expire_copied("star"));
        assert_eq!(browser.last_copied(), Some("heart"));

        assert!(browser.expire_copied("heart"));
        assert_eq!(browser.last_copied(), None);
    }

    #[test]
    fn test_tick_clears_indicator() {
        let mut browser = browser();
        let star = sym(&browser, "star");

        browser.copy(&star).unwrap();
        assert!(!browser.tick(Instant::now()));
        assert!(browser.is_copied(&star));

        assert!(browser.tick(Instant::now() + Duration::from_secs(2)));
        assert!(!browser.is_copied(&star));
    }
}

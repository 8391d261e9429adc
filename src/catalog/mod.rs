//! # Symbol Catalog
//!
//! The immutable set of browsable symbols and the glyph table used to render
//! them.
//!
//! ## Components
//!
//! - [`Symbol`] / [`Category`] - the value types
//! - [`SymbolCatalog`] - ordered symbol list with lookup by name
//! - [`GlyphTable`] - lazily loaded name → glyph mapping
//!
//! Every symbol carries exactly one real (non-meta) category. The catalog
//! order is the order of the bundled table and is what every unordered view
//! (category, favorites, search) preserves.

mod data;
pub mod glyphs;
pub mod symbol;

pub use glyphs::GlyphTable;
pub use symbol::{Category, Symbol};

use std::collections::HashMap;

/// Ordered, immutable collection of symbols.
#[derive(Debug, Clone)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl SymbolCatalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_symbols(
            data::SYMBOLS
                .iter()
                .map(|(name, category)| Symbol::new(*name, *category)),
        )
    }

    /// Build a catalog from arbitrary symbols. Later duplicates of a name are
    /// dropped so that names stay unique.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut list = Vec::new();
        let mut index = HashMap::new();

        for symbol in symbols {
            if index.contains_key(&symbol.name) {
                continue;
            }
            index.insert(symbol.name.clone(), list.len());
            list.push(symbol);
        }

        Self {
            symbols: list,
            index,
        }
    }

    /// All symbols in catalog order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// All categories in sidebar order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}

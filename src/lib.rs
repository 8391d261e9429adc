//! SymbolDrop - browse, search and copy system icon symbols from the terminal
//!
//! This library provides the symbol catalog, the browsing state (filtering,
//! favorites, recents, copy formats), preference persistence, clipboard
//! access, and the terminal UI built on top of them.

pub mod browser;
pub mod catalog;
pub mod clipboard;
pub mod prefs;
pub mod ui;

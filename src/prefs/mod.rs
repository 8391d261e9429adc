//! # Preferences Module
//!
//! Persists the three user preferences that survive restarts:
//!
//! - the recently copied symbols (most recent first, at most
//!   [`MAX_RECENT_SYMBOLS`])
//! - the favorite symbols
//! - the active copy format
//!
//! ## Storage
//!
//! [`JsonPreferenceStore`] keeps them in a single JSON file in the
//! platform data directory:
//! - Linux: `~/.local/share/symboldrop/preferences.json`
//! - macOS: `~/Library/Application Support/symboldrop/preferences.json`
//! - Windows: `%APPDATA%\symboldrop\data\preferences.json`
//!
//! ## Data Format
//!
//! ```json
//! {
//!   "recentSymbolIDs": ["star.fill", "heart"],
//!   "favoriteSymbolIDs": ["bolt.fill"],
//!   "copyFormat": "unicode"
//! }
//! ```
//!
//! Every setter writes the file immediately. [`MemoryPreferenceStore`] keeps
//! everything in memory and is what tests use.

mod store;

pub use store::{
    JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences, MAX_RECENT_SYMBOLS,
};

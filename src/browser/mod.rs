//! # Browser Module
//!
//! The state behind the symbol grid, independent of how it is drawn.
//!
//! - [`SymbolBrowser`] - filtering, copying, favorites and recents
//! - [`CopyFormat`] - how a copy renders a symbol
//! - [`CopyIndicator`] - the timed "copied" marker
//!
//! ## Filtering
//!
//! [`SymbolBrowser::filtered_symbols`] first narrows by the selected
//! category, then by the search text:
//!
//! | Category | Result | Order |
//! |----------|--------|-------|
//! | `All` | every symbol | catalog |
//! | `Recent` | recently copied symbols still in the catalog | most recent first |
//! | `Favorites` | favorite symbols | catalog |
//! | any other | symbols stored under it | catalog |
//!
//! A non-empty search keeps only names containing the text, ignoring case.

pub mod format;
pub mod indicator;
pub mod state;

pub use format::CopyFormat;
pub use indicator::{CopyIndicator, COPIED_INDICATOR_DURATION};
pub use state::SymbolBrowser;

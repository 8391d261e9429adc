//! # UI Module
//!
//! The terminal user interface for SymbolDrop.
//!
//! ## Components
//!
//! - [`App`] - Screen state around a [`SymbolBrowser`](crate::browser::SymbolBrowser)
//!   (focus, grid selection and scrolling, search mode, popovers)
//! - [`mod@input`] - Keyboard and mouse dispatch
//! - [`mod@layout`] - Screen geometry shared by drawing and hit-testing
//! - [`mod@render`] - Drawing functions
//! - [`config`] / [`theme`] - Persisted settings and color themes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │ SymbolDrop  Copy as: Unicode Character          │
//! ├──────────────┬──────────────────────────────────┤
//! │ ▸ All        │ Search symbols...                │
//! │   Recent     │ 364 symbols                      │
//! │   Favorites  │ ┌──────────────────────────────┐ │
//! │   General    │ │  ☆         ★         ♥ ✓     │ │
//! │   ...        │ │  star      star.fill heart   │ │
//! │              │ └──────────────────────────────┘ │
//! ├──────────────┴──────────────────────────────────┤
//! │ [hjkl] Move  [Enter] Copy  [n] Name ...          │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;

//! # Theme System
//!
//! Color themes for the SymbolDrop TUI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! them from the active [`Theme`]. Press `t` to cycle through the built-in
//! themes; the choice is saved in the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Catppuccin Frappe**
//! - **Dracula**
//! - **Nord**
//! - **Gruvbox Dark**

use ratatui::style::Color;

/// Colors used by the TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name shown in the header and stored in the config.
    pub name: &'static str,

    /// Panel and modal background.
    pub bg: Color,
    /// Symbol names, category labels.
    pub fg: Color,
    /// Placeholders, hints, counts.
    pub fg_dim: Color,

    /// Focused borders and the selected category.
    pub accent: Color,
    /// Favorite stars.
    pub favorite: Color,
    /// The copied check mark and "Copied!" label.
    pub copied: Color,
    /// Error status messages.
    pub error: Color,

    /// Background of the selected grid cell.
    pub selection_bg: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let current = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(current + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 6] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(137, 180, 250),     // blue
        favorite: Color::Rgb(249, 226, 175),   // yellow
        copied: Color::Rgb(166, 227, 161),     // green
        error: Color::Rgb(243, 139, 168),      // red
        selection_bg: Color::Rgb(69, 71, 90),  // surface1
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),
        fg: Color::Rgb(202, 211, 245),
        fg_dim: Color::Rgb(110, 115, 141),
        accent: Color::Rgb(138, 173, 244),
        favorite: Color::Rgb(238, 212, 159),
        copied: Color::Rgb(166, 218, 149),
        error: Color::Rgb(237, 135, 150),
        selection_bg: Color::Rgb(73, 77, 100),
    },
    Theme {
        name: "Catppuccin Frappe",
        bg: Color::Rgb(48, 52, 70),
        fg: Color::Rgb(198, 208, 245),
        fg_dim: Color::Rgb(115, 121, 148),
        accent: Color::Rgb(140, 170, 238),
        favorite: Color::Rgb(229, 200, 144),
        copied: Color::Rgb(166, 209, 137),
        error: Color::Rgb(231, 130, 132),
        selection_bg: Color::Rgb(81, 87, 109),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),
        favorite: Color::Rgb(241, 250, 140),
        copied: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        favorite: Color::Rgb(235, 203, 139),
        copied: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        favorite: Color::Rgb(250, 189, 47),
        copied: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
    },
];

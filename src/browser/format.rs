use crate::catalog::{GlyphTable, Symbol};
use std::fmt;
use std::str::FromStr;

/// How a copy action renders a symbol onto the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFormat {
    /// The symbol's glyph, or its name when no glyph is mapped.
    #[default]
    Unicode,
    /// The bare symbol name.
    SymbolName,
    /// A SwiftUI `Image(systemName:)` expression.
    CodeSnippet,
}

impl CopyFormat {
    pub const ALL: [CopyFormat; 3] = [
        CopyFormat::Unicode,
        CopyFormat::SymbolName,
        CopyFormat::CodeSnippet,
    ];

    /// Identifier written to the preference file.
    pub fn id(self) -> &'static str {
        match self {
            CopyFormat::Unicode => "unicode",
            CopyFormat::SymbolName => "symbol-name",
            CopyFormat::CodeSnippet => "code-snippet",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyFormat::Unicode => "Unicode Character",
            CopyFormat::SymbolName => "Symbol Name",
            CopyFormat::CodeSnippet => "SwiftUI Code",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CopyFormat::Unicode => "Copies the symbol as a Unicode character (★)",
            CopyFormat::SymbolName => "Copies the symbol name (star.fill)",
            CopyFormat::CodeSnippet => {
                "Copies as SwiftUI code (Image(systemName: \"star.fill\"))"
            }
        }
    }

    /// The format after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            CopyFormat::Unicode => CopyFormat::SymbolName,
            CopyFormat::SymbolName => CopyFormat::CodeSnippet,
            CopyFormat::CodeSnippet => CopyFormat::Unicode,
        }
    }

    /// Render `symbol` as clipboard text.
    pub fn render(self, symbol: &Symbol, glyphs: &GlyphTable) -> String {
        match self {
            CopyFormat::Unicode => glyphs
                .glyph(&symbol.name)
                .map_or_else(|| symbol.name.clone(), str::to_string),
            CopyFormat::SymbolName => symbol.name.clone(),
            CopyFormat::CodeSnippet => code_snippet(&symbol.name),
        }
    }
}

/// The SwiftUI expression for a symbol name.
pub fn code_snippet(name: &str) -> String {
    format!("Image(systemName: \"{}\")", name)
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CopyFormat {
    type Err = anyhow::Error;

    /// Accepts the identifier (`symbol-name`) or the label (`Symbol Name`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CopyFormat::ALL
            .iter()
            .copied()
            .find(|f| f.id().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown copy format: {}", s))
    }
}

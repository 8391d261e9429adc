use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Sidebar categories, in display order.
///
/// `All`, `Recent` and `Favorites` are meta-categories: they select symbols by
/// some other criterion and are never stored on a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Recent,
    Favorites,
    General,
    Communication,
    Weather,
    Objects,
    Devices,
    Connectivity,
    Transportation,
    Human,
    Nature,
    Editing,
    TextFormatting,
    Media,
    Commerce,
    Time,
    Health,
    Shapes,
    Arrows,
    Math,
}

impl Category {
    /// Every category in sidebar order.
    pub const ALL: [Category; 21] = [
        Category::All,
        Category::Recent,
        Category::Favorites,
        Category::General,
        Category::Communication,
        Category::Weather,
        Category::Objects,
        Category::Devices,
        Category::Connectivity,
        Category::Transportation,
        Category::Human,
        Category::Nature,
        Category::Editing,
        Category::TextFormatting,
        Category::Media,
        Category::Commerce,
        Category::Time,
        Category::Health,
        Category::Shapes,
        Category::Arrows,
        Category::Math,
    ];

    /// Whether this category is computed rather than stored on symbols.
    pub fn is_meta(self) -> bool {
        matches!(self, Category::All | Category::Recent | Category::Favorites)
    }

    /// Stable identifier used on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Recent => "recent",
            Category::Favorites => "favorites",
            Category::General => "general",
            Category::Communication => "communication",
            Category::Weather => "weather",
            Category::Objects => "objects",
            Category::Devices => "devices",
            Category::Connectivity => "connectivity",
            Category::Transportation => "transportation",
            Category::Human => "human",
            Category::Nature => "nature",
            Category::Editing => "editing",
            Category::TextFormatting => "text-formatting",
            Category::Media => "media",
            Category::Commerce => "commerce",
            Category::Time => "time",
            Category::Health => "health",
            Category::Shapes => "shapes",
            Category::Arrows => "arrows",
            Category::Math => "math",
        }
    }

    /// Human-readable label shown in the sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Recent => "Recent",
            Category::Favorites => "Favorites",
            Category::General => "General",
            Category::Communication => "Communication",
            Category::Weather => "Weather",
            Category::Objects => "Objects & Tools",
            Category::Devices => "Devices",
            Category::Connectivity => "Connectivity",
            Category::Transportation => "Transportation",
            Category::Human => "Human",
            Category::Nature => "Nature",
            Category::Editing => "Editing",
            Category::TextFormatting => "Text Formatting",
            Category::Media => "Media",
            Category::Commerce => "Commerce",
            Category::Time => "Time",
            Category::Health => "Health",
            Category::Shapes => "Shapes",
            Category::Arrows => "Arrows",
            Category::Math => "Math",
        }
    }

    /// Name of the symbol used as this category's sidebar icon.
    pub fn icon(self) -> &'static str {
        match self {
            Category::All => "square.grid.2x2",
            Category::Recent => "clock",
            Category::Favorites => "star",
            Category::General => "square.grid.3x3",
            Category::Communication => "message",
            Category::Weather => "cloud.sun",
            Category::Objects => "hammer",
            Category::Devices => "desktopcomputer",
            Category::Connectivity => "antenna.radiowaves.left.and.right",
            Category::Transportation => "car",
            Category::Human => "person",
            Category::Nature => "leaf",
            Category::Editing => "pencil.tip",
            Category::TextFormatting => "textformat",
            Category::Media => "play.rectangle",
            Category::Commerce => "cart",
            Category::Time => "timer",
            Category::Health => "heart",
            Category::Shapes => "square.on.circle",
            Category::Arrows => "arrow.right",
            Category::Math => "function",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Accepts either the identifier (`text-formatting`) or the label
    /// (`Text Formatting`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.id().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow::anyhow!("Unknown category: {}", s))
    }
}

/// A single browsable symbol. The name doubles as its identifier.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub category: Category,
}

impl Symbol {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    /// The part of the name before the first `.`, or the whole name.
    pub fn base_name(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}

// Identity is the name alone.
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_properties() {
        let symbol = Symbol::new("star.fill", Category::General);
        assert_eq!(symbol.id(), "star.fill");
        assert_eq!(symbol.name, "star.fill");
        assert_eq!(symbol.category, Category::General);
    }

    #[test]
    fn test_symbol_equality_is_by_name() {
        let a = Symbol::new("star.fill", Category::General);
        let b = Symbol::new("star.fill", Category::Shapes);
        let c = Symbol::new("heart.fill", Category::Health);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Symbol> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(Symbol::new("star.fill", Category::General).base_name(), "star");
        assert_eq!(
            Symbol::new("arrow.up.circle", Category::Arrows).base_name(),
            "arrow"
        );
        assert_eq!(Symbol::new("heart", Category::Health).base_name(), "heart");
    }

    #[test]
    fn test_meta_categories_come_first() {
        assert_eq!(Category::ALL[0], Category::All);
        let first_real = Category::ALL
            .iter()
            .position(|c| !c.is_meta())
            .expect("has real categories");
        assert!(Category::ALL[..first_real].iter().all(|c| c.is_meta()));
        assert!(Category::ALL[first_real..].iter().all(|c| !c.is_meta()));
    }

    #[test]
    fn test_every_category_has_label_and_icon() {
        for category in Category::ALL {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty(), "{} has no icon", category);
        }
        assert_eq!(Category::All.label(), "All");
        assert_eq!(Category::General.label(), "General");
        assert_eq!(Category::Communication.label(), "Communication");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("general".parse::<Category>().unwrap(), Category::General);
        assert_eq!(
            "Text Formatting".parse::<Category>().unwrap(),
            Category::TextFormatting
        );
        assert_eq!(
            "TEXT-FORMATTING".parse::<Category>().unwrap(),
            Category::TextFormatting
        );
        assert_eq!(" recent ".parse::<Category>().unwrap(), Category::Recent);
        assert!("nonexistent".parse::<Category>().is_err());
    }
}

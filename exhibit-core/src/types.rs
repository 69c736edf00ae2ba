//! Shared identifiers for carousels on a page.

use std::fmt;

/// Unique key for identifying carousels on a page.
/// Using a strongly-typed key keeps per-carousel state scoped without
/// global singletons or string matching. Keys order as declared, custom
/// carousels last by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarouselKey {
    /// Artwork gallery (chapter-filterable).
    Gallery,
    /// Workshop-week timeline.
    Workshop,
    Custom(&'static str),
}

impl CarouselKey {
    pub fn name(&self) -> &'static str {
        match self {
            CarouselKey::Gallery => "gallery",
            CarouselKey::Workshop => "workshop",
            CarouselKey::Custom(name) => name,
        }
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

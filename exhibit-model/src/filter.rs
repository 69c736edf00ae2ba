use std::fmt::{self, Display};

use crate::slide::{Category, Slide};

/// Which slides participate in navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SlideFilter {
    /// Every slide is visible.
    #[default]
    All,
    /// Only slides tagged with this category are visible.
    Category(Category),
}

impl SlideFilter {
    /// Sentinel used by filter tabs to mean "no restriction".
    pub const ALL_TAG: &'static str = "all";

    /// Parse a filter tab value. `"all"` (any case) and blank input select
    /// everything; anything else is a category tag.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_TAG) {
            return SlideFilter::All;
        }
        match Category::new(trimmed) {
            Ok(category) => SlideFilter::Category(category),
            Err(_) => SlideFilter::All,
        }
    }

    pub fn matches(&self, slide: &Slide) -> bool {
        match self {
            SlideFilter::All => true,
            SlideFilter::Category(wanted) => slide.category() == Some(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SlideFilter::All)
    }
}

impl Display for SlideFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideFilter::All => f.write_str(Self::ALL_TAG),
            SlideFilter::Category(category) => write!(f, "{category}"),
        }
    }
}

impl From<Category> for SlideFilter {
    fn from(value: Category) -> Self {
        SlideFilter::Category(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SlideFilter {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SlideFilter {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SlideFilter::parse(&raw))
    }
}

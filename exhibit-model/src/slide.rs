use std::fmt::{self, Display};

use crate::error::{ModelError, Result};
use crate::ids::SlideId;

/// Category tag attached to a slide (an exhibition chapter, for instance).
///
/// Tags are compared verbatim; surrounding whitespace is trimmed on
/// construction so `" ii "` and `"ii"` refer to the same chapter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Category(String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyCategory);
        }
        if trimmed.len() == tag.len() {
            Ok(Category(tag))
        } else {
            Ok(Category(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Category::new(value)
    }
}

impl TryFrom<&str> for Category {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self> {
        Category::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// Opaque handle to one navigable item, as reported by the slide provider.
///
/// Order inside a carousel is significant (it defines adjacency) but is owned
/// by the collection, not by the slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub id: SlideId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<Category>,
}

impl Slide {
    pub fn new(id: impl Into<SlideId>) -> Self {
        Self {
            id: id.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_trims_whitespace() {
        let category = Category::new("  chapter-ii ").unwrap();
        assert_eq!(category.as_str(), "chapter-ii");
    }

    #[test]
    fn blank_category_is_rejected() {
        assert_eq!(Category::new("   "), Err(ModelError::EmptyCategory));
    }

    #[test]
    fn slide_builder_attaches_category() {
        let tag = Category::new("b").unwrap();
        let slide = Slide::new(7).with_category(tag.clone());
        assert_eq!(slide.id, SlideId(7));
        assert_eq!(slide.category(), Some(&tag));
    }
}

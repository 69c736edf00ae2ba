//! Where carousels get their slide snapshots from.

use exhibit_model::Slide;

use crate::error::{CarouselError, Result};
use crate::types::CarouselKey;

/// Ordered slide collection for one carousel region.
///
/// Queried once at mount and again on explicit resync; never reactively.
pub trait SlideProvider {
    fn slides(&self, key: &CarouselKey) -> Result<Vec<Slide>>;
}

impl<F> SlideProvider for F
where
    F: Fn(&CarouselKey) -> Result<Vec<Slide>>,
{
    fn slides(&self, key: &CarouselKey) -> Result<Vec<Slide>> {
        self(key)
    }
}

/// A fixed snapshot, or a region that is absent from the page.
#[derive(Debug, Clone, Default)]
pub struct StaticSlides {
    slides: Option<Vec<Slide>>,
}

impl StaticSlides {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides: Some(slides),
        }
    }

    /// The region does not exist on this page.
    pub fn missing() -> Self {
        Self { slides: None }
    }
}

impl SlideProvider for StaticSlides {
    fn slides(&self, key: &CarouselKey) -> Result<Vec<Slide>> {
        self.slides
            .clone()
            .ok_or_else(|| CarouselError::MissingRegion { key: key.clone() })
    }
}

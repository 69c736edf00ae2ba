//! The two exhibition carousels as thin configurations of the engine.

use exhibit_config::CarouselSettings;
use exhibit_model::Slide;

use crate::carousel::Carousel;
use crate::clock::{Clock, MonotonicClock};
use crate::policy::{GalleryPolicy, TimelinePolicy, TransformPolicy};
use crate::types::CarouselKey;

impl CarouselKey {
    /// Policy a carousel gets unless one is supplied.
    pub fn default_policy(&self) -> Box<dyn TransformPolicy> {
        match self {
            CarouselKey::Workshop => Box::new(TimelinePolicy::default()),
            CarouselKey::Gallery | CarouselKey::Custom(_) => Box::new(GalleryPolicy),
        }
    }
}

impl<C: Clock> Carousel<C> {
    /// Artwork gallery: 3D role table.
    pub fn gallery_with_clock(slides: Vec<Slide>, settings: CarouselSettings, clock: C) -> Self {
        Self::with_clock(
            CarouselKey::Gallery,
            slides,
            settings,
            Box::new(GalleryPolicy),
            clock,
        )
    }

    /// Workshop timeline: linear offsets.
    pub fn workshop_with_clock(slides: Vec<Slide>, settings: CarouselSettings, clock: C) -> Self {
        Self::with_clock(
            CarouselKey::Workshop,
            slides,
            settings,
            Box::new(TimelinePolicy::default()),
            clock,
        )
    }
}

impl Carousel<MonotonicClock> {
    pub fn gallery(slides: Vec<Slide>, settings: CarouselSettings) -> Self {
        Self::gallery_with_clock(slides, settings, MonotonicClock::new())
    }

    pub fn workshop(slides: Vec<Slide>, settings: CarouselSettings) -> Self {
        Self::workshop_with_clock(slides, settings, MonotonicClock::new())
    }
}

#[cfg(test)]
mod tests {
    use exhibit_model::WrapMode;

    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn workshop_preset_uses_timeline_offsets() {
        let mut workshop = Carousel::workshop_with_clock(
            (0..4u32).map(Slide::new).collect(),
            CarouselSettings::workshop(),
            ManualClock::new(),
        );
        assert_eq!(workshop.settings().wrap_mode, WrapMode::Finite);
        workshop.go_to(2);
        let transforms: Vec<_> = workshop
            .layout()
            .into_iter()
            .map(|entry| entry.style.transform)
            .collect();
        assert_eq!(
            transforms,
            vec![
                "translateX(-200%)",
                "translateX(-100%)",
                "translateX(0%)",
                "translateX(100%)"
            ]
        );
    }

    #[test]
    fn gallery_preset_is_keyed_and_wraps() {
        let gallery = Carousel::gallery((0..3u32).map(Slide::new).collect(), CarouselSettings::gallery());
        assert_eq!(gallery.key(), &CarouselKey::Gallery);
        assert_eq!(gallery.settings().wrap_mode, WrapMode::Wrap);
    }
}

//! Carousel engine for the exhibition site.
//!
//! One generic [`Carousel`] drives both page carousels: the artwork gallery
//! (circular, 3D role transforms, page-wide arrow keys, autoplay) and the
//! workshop timeline (clamped at its ends, linear offsets, arrows scoped to
//! its region). The engine keeps the active index over a filtered slide
//! subset, holds an animation lock against an injected [`Clock`], and hands
//! computed styles and indicator state to a [`CarouselSurface`].
//!
//! Pages own their carousels through [`ExhibitPage`]; there is no global
//! carousel state.
#![allow(missing_docs)]

pub mod autoplay;
pub mod carousel;
pub mod clock;
pub mod debounce;
pub mod error;
pub mod focus;
pub mod indicators;
pub mod input;
pub mod page;
pub mod policy;
mod presets;
pub mod provider;
pub mod registry;
pub mod surface;
pub mod telemetry;
pub mod types;

pub use autoplay::Autoplay;
pub use carousel::{
    Carousel, IgnoreReason, InputOutcome, NavOutcome, Phase, PollReport, SlideLayout,
};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use debounce::Debouncer;
pub use error::{CarouselError, Result};
pub use focus::CarouselFocus;
pub use input::{InputEvent, Intent, Key, SwipeDirection, SwipeTracker};
pub use page::{CarouselMount, ExhibitPage, OpenDetail, PageTick};
pub use policy::{GalleryPolicy, SlidePlacement, TimelinePolicy, TransformPolicy};
pub use provider::{SlideProvider, StaticSlides};
pub use registry::CarouselRegistry;
pub use surface::{CarouselSurface, NullSurface};
pub use types::CarouselKey;

pub use exhibit_config::{CarouselSettings, ExhibitConfig};
pub use exhibit_model::{
    Category, ControlState, IndicatorMarker, KeyScope, Slide, SlideFilter, SlideId, SlideRole,
    StyleDirective, WrapMode,
};

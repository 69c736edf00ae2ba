//! Outbound adapter seam: where computed state leaves the engine.
//!
//! The engine owns no rendering. Every re-layout, indicator regeneration and
//! highlight change is pushed through a [`CarouselSurface`]; a DOM binding,
//! a terminal preview or a test recorder implements it.

use exhibit_model::{ControlState, IndicatorMarker, SlideId, SlideRole, StyleDirective};

#[cfg_attr(test, mockall::automock)]
pub trait CarouselSurface {
    /// Apply a style to one slide. `role` is `None` for filtered-out slides.
    fn apply_style(&mut self, slide: SlideId, role: Option<SlideRole>, style: &StyleDirective);

    /// Replace the whole indicator row (one marker per visible slide).
    fn render_indicators(&mut self, markers: &[IndicatorMarker]);

    /// Move the indicator highlight without rebuilding the row.
    fn highlight_indicator(&mut self, active: Option<usize>);

    /// Enable or disable the previous/next buttons.
    fn update_controls(&mut self, controls: ControlState);
}

/// Surface that discards everything; used before a renderer is attached and
/// after teardown.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl CarouselSurface for NullSurface {
    fn apply_style(&mut self, _slide: SlideId, _role: Option<SlideRole>, _style: &StyleDirective) {}

    fn render_indicators(&mut self, _markers: &[IndicatorMarker]) {}

    fn highlight_indicator(&mut self, _active: Option<usize>) {}

    fn update_controls(&mut self, _controls: ControlState) {}
}

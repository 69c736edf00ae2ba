//! Role -> style policies.
//!
//! The engine resolves each visible slide's [`SlideRole`]; a policy turns the
//! resolved placement into the exact directive the renderer applies. Policies
//! are data, not logic: the gallery table below is the visual contract for
//! the artwork carousel.

use std::fmt;

use exhibit_model::{SlideRole, StyleDirective};

/// Where a visible slide sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidePlacement {
    /// Position among the currently visible slides.
    pub position: usize,
    /// Visible position of the active slide.
    pub active: usize,
    pub visible: usize,
    pub role: SlideRole,
}

impl SlidePlacement {
    /// Signed linear distance from the active slide (no wrap-around).
    pub fn linear_offset(&self) -> i64 {
        self.position as i64 - self.active as i64
    }
}

/// Strategy mapping a placement to a style directive.
pub trait TransformPolicy: fmt::Debug {
    fn directive(&self, placement: &SlidePlacement) -> StyleDirective;
}

/// 3D cover-flow style used by the artwork gallery.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryPolicy;

impl GalleryPolicy {
    pub const ACTIVE_TRANSFORM: &'static str =
        "translateX(0) translateZ(0) rotateY(0deg) scale(1)";
    pub const PREV_TRANSFORM: &'static str =
        "translateX(-120%) translateZ(-200px) rotateY(25deg) scale(0.8)";
    pub const NEXT_TRANSFORM: &'static str =
        "translateX(120%) translateZ(-200px) rotateY(-25deg) scale(0.8)";
    pub const FAR_TRANSFORM: &'static str = "translateX(0) translateZ(-400px) scale(0.6)";

    pub fn for_role(role: SlideRole) -> StyleDirective {
        match role {
            SlideRole::Active => StyleDirective::new(Self::ACTIVE_TRANSFORM, 1.0, 10),
            SlideRole::Prev => StyleDirective::new(Self::PREV_TRANSFORM, 0.7, 5),
            SlideRole::Next => StyleDirective::new(Self::NEXT_TRANSFORM, 0.7, 5),
            SlideRole::Far => StyleDirective::new(Self::FAR_TRANSFORM, 0.3, 1),
        }
    }
}

impl TransformPolicy for GalleryPolicy {
    fn directive(&self, placement: &SlidePlacement) -> StyleDirective {
        Self::for_role(placement.role)
    }
}

/// Horizontal strip used by the workshop timeline: each week sits one track
/// width away from its neighbour and only the current week takes focus.
#[derive(Debug, Clone, Copy)]
pub struct TimelinePolicy {
    /// Opacity applied to weeks other than the current one.
    pub inactive_opacity: f32,
}

impl Default for TimelinePolicy {
    fn default() -> Self {
        Self {
            inactive_opacity: 0.6,
        }
    }
}

impl TransformPolicy for TimelinePolicy {
    fn directive(&self, placement: &SlidePlacement) -> StyleDirective {
        let offset = placement.linear_offset();
        let transform = format!("translateX({}%)", offset * 100);
        if placement.role == SlideRole::Active {
            StyleDirective::new(transform, 1.0, 2)
        } else {
            StyleDirective::new(transform, self.inactive_opacity, 1).unfocusable()
        }
    }
}

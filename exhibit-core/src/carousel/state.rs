//! Plain values reported by the engine: lock phase, navigation outcomes and
//! per-slide layout.

use std::fmt;

use exhibit_model::{SlideId, SlideRole, StyleDirective};

/// The animation lock as an explicit two-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A transition started at `since_ms` holds the lock until `until_ms`.
    Transitioning { since_ms: u64, until_ms: u64 },
}

impl Phase {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Phase::Transitioning { .. })
    }

    /// The phase as seen at `now_ms`. A transition whose deadline has passed
    /// reads as idle even before anything settles it.
    pub fn at(self, now_ms: u64) -> Phase {
        match self {
            Phase::Transitioning { until_ms, .. } if now_ms >= until_ms => Phase::Idle,
            other => other,
        }
    }
}

/// Why a navigation request had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A transition is in flight.
    Locked,
    /// Target is already the active slide.
    SameIndex,
    /// Target lies outside `[0, visible_count)`.
    OutOfRange,
    /// Zero or one visible slide.
    TooFewSlides,
    /// Finite carousel already at its first or last slide.
    AtBoundary,
    /// The carousel has been torn down.
    TornDown,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::Locked => "locked",
            IgnoreReason::SameIndex => "same_index",
            IgnoreReason::OutOfRange => "out_of_range",
            IgnoreReason::TooFewSlides => "too_few_slides",
            IgnoreReason::AtBoundary => "at_boundary",
            IgnoreReason::TornDown => "torn_down",
        };
        f.write_str(text)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The active index changed and the lock is now held.
    Moved { from: usize, to: usize },
    /// The already-active slide was clicked; the page should show its detail.
    DetailOpened(SlideId),
    Ignored(IgnoreReason),
}

impl NavOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, NavOutcome::Moved { .. })
    }

    pub fn ignored_reason(&self) -> Option<IgnoreReason> {
        match self {
            NavOutcome::Ignored(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Timer edges observed by one `poll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollReport {
    /// The lock was released during this poll.
    pub settled: bool,
    /// Autoplay fired and attempted to advance.
    pub autoplay: Option<NavOutcome>,
}

/// Computed placement of one slide, filtered-out slides included.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    pub slide: SlideId,
    /// Position among visible slides; `None` when filtered out.
    pub position: Option<usize>,
    pub role: Option<SlideRole>,
    pub style: StyleDirective,
}

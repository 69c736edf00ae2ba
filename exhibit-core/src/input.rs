//! Input sources translated into navigation intents.
//!
//! UI event handlers are thin adapters: they turn a raw pointer, touch or key
//! event into an [`InputEvent`] and hand it to the carousel. Nothing in here
//! touches carousel state directly.

use exhibit_model::{KeyScope, SlideFilter};

/// Keys the carousels react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// One raw interaction with a carousel region.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PrevButton,
    NextButton,
    /// Click on the indicator marker at this visible position.
    IndicatorClick(usize),
    /// Click on the slide at this visible position.
    SlideClick(usize),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    /// `in_region` is true when the key event originated inside the
    /// carousel's own region.
    Key { key: Key, in_region: bool },
    FilterSelected(SlideFilter),
    PointerEnter,
    PointerLeave,
    VisibilityChanged { hidden: bool },
    Resize,
}

/// What an input asks the engine to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Next,
    Previous,
    GoTo(usize),
    /// Slide click: navigate if inactive, open detail if already active.
    Activate(usize),
    SetFilter(SlideFilter),
    CloseDetail,
}

/// Direction recognised from a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled rightwards: reveal the previous slide.
    Previous,
    /// Finger travelled leftwards: reveal the next slide.
    Next,
}

impl From<SwipeDirection> for Intent {
    fn from(value: SwipeDirection) -> Self {
        match value {
            SwipeDirection::Previous => Intent::Previous,
            SwipeDirection::Next => Intent::Next,
        }
    }
}

/// Pairs touch-start with touch-end and classifies the horizontal travel.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
            start_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold_px
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Travel shorter than the threshold is noise. A touch-end without a
    /// matching start is ignored.
    pub fn touch_end(&mut self, x: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if !delta.is_finite() || delta.abs() < self.threshold_px {
            return None;
        }
        if delta > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    }
}

/// Translate an arrow/escape key under the given scope.
pub fn key_intent(key: Key, in_region: bool, scope: KeyScope) -> Option<Intent> {
    if key == Key::Escape {
        return Some(Intent::CloseDetail);
    }
    if scope == KeyScope::Region && !in_region {
        return None;
    }
    match key {
        Key::ArrowLeft => Some(Intent::Previous),
        Key::ArrowRight => Some(Intent::Next),
        Key::Escape | Key::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rightward_drag_reveals_previous() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(180.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn leftward_drag_reveals_next() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(250.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn short_drags_are_noise() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(149.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.touch_end(500.0), None);
        swipe.touch_start(0.0);
        assert!(swipe.touch_end(-60.0).is_some());
        assert_eq!(swipe.touch_end(-200.0), None);
    }

    #[test]
    fn region_scope_needs_focus_inside_region() {
        assert_eq!(key_intent(Key::ArrowRight, false, KeyScope::Region), None);
        assert_eq!(
            key_intent(Key::ArrowRight, true, KeyScope::Region),
            Some(Intent::Next)
        );
        assert_eq!(
            key_intent(Key::ArrowLeft, false, KeyScope::Global),
            Some(Intent::Previous)
        );
    }

    #[test]
    fn escape_closes_detail_in_any_scope() {
        assert_eq!(
            key_intent(Key::Escape, false, KeyScope::Region),
            Some(Intent::CloseDetail)
        );
    }

    #[test]
    fn dom_key_names_map_to_keys() {
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Other);
    }
}

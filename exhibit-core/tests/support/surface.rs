//! A surface that records what the engine pushed to it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use exhibit_core::{
    CarouselSurface, ControlState, IndicatorMarker, SlideId, SlideRole, StyleDirective,
};

#[derive(Debug, Default)]
pub struct Recording {
    pub styles: HashMap<SlideId, (Option<SlideRole>, StyleDirective)>,
    pub indicators: Vec<IndicatorMarker>,
    pub highlighted: Option<usize>,
    pub controls: Option<ControlState>,
    pub style_writes: usize,
}

#[allow(dead_code)]
impl Recording {
    pub fn role_of(&self, slide: u32) -> Option<SlideRole> {
        self.styles.get(&SlideId(slide)).and_then(|(role, _)| *role)
    }

    pub fn is_shown(&self, slide: u32) -> bool {
        self.styles
            .get(&SlideId(slide))
            .is_some_and(|(_, style)| style.visible)
    }
}

/// Cloneable handle; every clone writes into the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot<R>(&self, read: impl FnOnce(&Recording) -> R) -> R {
        read(&self.inner.borrow())
    }
}

impl CarouselSurface for RecordingSurface {
    fn apply_style(&mut self, slide: SlideId, role: Option<SlideRole>, style: &StyleDirective) {
        let mut recording = self.inner.borrow_mut();
        recording.styles.insert(slide, (role, style.clone()));
        recording.style_writes += 1;
    }

    fn render_indicators(&mut self, markers: &[IndicatorMarker]) {
        self.inner.borrow_mut().indicators = markers.to_vec();
    }

    fn highlight_indicator(&mut self, active: Option<usize>) {
        let mut recording = self.inner.borrow_mut();
        recording.highlighted = active;
        for marker in &mut recording.indicators {
            marker.active = Some(marker.position) == active;
        }
    }

    fn update_controls(&mut self, controls: ControlState) {
        self.inner.borrow_mut().controls = Some(controls);
    }
}

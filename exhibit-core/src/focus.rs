//! Keyboard focus across the carousels on one page.
//!
//! Tracks which carousel should receive arrow keys based on hover state and
//! explicit activation (button or indicator clicks).

use crate::types::CarouselKey;

/// Resolution order for the keyboard target:
/// 1. `hovered_key`: the carousel under the pointer takes priority
/// 2. `keyboard_active_key`: the carousel last clicked or focused explicitly
#[derive(Debug, Default, Clone)]
pub struct CarouselFocus {
    pub hovered_key: Option<CarouselKey>,
    pub keyboard_active_key: Option<CarouselKey>,
}

impl CarouselFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a carousel.
    pub fn set_hovered(&mut self, key: CarouselKey) {
        self.hovered_key = Some(key);
    }

    /// Pointer left `key`; hover held by another carousel is kept.
    pub fn clear_hover(&mut self, key: &CarouselKey) {
        if self.hovered_key.as_ref() == Some(key) {
            self.hovered_key = None;
        }
    }

    pub fn set_keyboard_active(&mut self, key: CarouselKey) {
        self.keyboard_active_key = Some(key);
    }

    pub fn active_key(&self) -> Option<&CarouselKey> {
        self.hovered_key
            .as_ref()
            .or(self.keyboard_active_key.as_ref())
    }

    pub fn is_active(&self, key: &CarouselKey) -> bool {
        self.active_key() == Some(key)
    }

    /// Drop any reference to a carousel that is going away.
    pub fn forget(&mut self, key: &CarouselKey) {
        if self.hovered_key.as_ref() == Some(key) {
            self.hovered_key = None;
        }
        if self.keyboard_active_key.as_ref() == Some(key) {
            self.keyboard_active_key = None;
        }
    }

    pub fn clear_all(&mut self) {
        self.hovered_key = None;
        self.keyboard_active_key = None;
    }
}

//! Trailing-edge debounce for bursty notifications (window resizes).

use std::time::Duration;

use crate::clock::duration_ms;

#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u64,
    deadline_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window_ms: duration_ms(window),
            deadline_ms: None,
        }
    }

    /// Record an event; pushes the flush deadline out by one window.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.window_ms));
    }

    /// True exactly once when the quiet window after the last trigger ends.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}

//! Interval-driven automatic advance.

use std::time::Duration;

use crate::clock::duration_ms;

/// Deadline-based autoplay timer. It never fires by itself; the owner polls
/// it with the current time and advances the carousel when it reports due.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval_ms: u64,
    pause_on_hover: bool,
    next_at_ms: u64,
    hovered: bool,
    hidden: bool,
    stopped: bool,
}

impl Autoplay {
    pub fn new(interval: Duration, pause_on_hover: bool, now_ms: u64) -> Self {
        let interval_ms = duration_ms(interval).max(1);
        Self {
            interval_ms,
            pause_on_hover,
            next_at_ms: now_ms.saturating_add(interval_ms),
            hovered: false,
            hidden: false,
            stopped: false,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn is_paused(&self) -> bool {
        self.stopped || self.hidden || (self.pause_on_hover && self.hovered)
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns true once per elapsed interval while not paused.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.is_paused() || now_ms < self.next_at_ms {
            return false;
        }
        self.next_at_ms = now_ms.saturating_add(self.interval_ms);
        true
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Leaving restarts the interval so the next advance is a full period away.
    pub fn pointer_leave(&mut self, now_ms: u64) {
        if self.hovered {
            self.hovered = false;
            self.restart(now_ms);
        }
    }

    pub fn set_hidden(&mut self, hidden: bool, now_ms: u64) {
        if self.hidden == hidden {
            return;
        }
        self.hidden = hidden;
        if !hidden {
            self.restart(now_ms);
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    fn restart(&mut self, now_ms: u64) {
        self.next_at_ms = now_ms.saturating_add(self.interval_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut autoplay = Autoplay::new(Duration::from_secs(5), true, 0);
        assert!(!autoplay.poll(4_999));
        assert!(autoplay.poll(5_000));
        assert!(!autoplay.poll(5_001));
        assert!(autoplay.poll(10_000));
    }

    #[test]
    fn hover_pauses_and_leave_restarts_the_period() {
        let mut autoplay = Autoplay::new(Duration::from_secs(5), true, 0);
        autoplay.pointer_enter();
        assert!(!autoplay.poll(6_000));
        autoplay.pointer_leave(6_000);
        assert!(!autoplay.poll(10_999));
        assert!(autoplay.poll(11_000));
    }

    #[test]
    fn hover_is_ignored_when_not_configured() {
        let mut autoplay = Autoplay::new(Duration::from_secs(1), false, 0);
        autoplay.pointer_enter();
        assert!(autoplay.poll(1_000));
    }

    #[test]
    fn hidden_page_pauses_until_visible_again() {
        let mut autoplay = Autoplay::new(Duration::from_secs(5), true, 0);
        autoplay.set_hidden(true, 1_000);
        assert!(!autoplay.poll(20_000));
        autoplay.set_hidden(false, 20_000);
        assert!(autoplay.poll(25_000));
    }

    #[test]
    fn stop_is_permanent() {
        let mut autoplay = Autoplay::new(Duration::from_secs(1), true, 0);
        autoplay.stop();
        autoplay.set_hidden(false, 0);
        assert!(!autoplay.poll(60_000));
    }
}

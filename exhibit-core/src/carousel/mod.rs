//! The carousel engine.
//!
//! A [`Carousel`] owns an ordered slide snapshot, the active index over the
//! filtered subset, and the animation lock. Every navigation call is a plain
//! method returning a [`NavOutcome`]; invalid requests are absorbed as
//! `Ignored` and never mutate state. Visual output goes through the attached
//! [`CarouselSurface`], styled by the carousel's [`TransformPolicy`].
//!
//! Time only enters through the injected [`Clock`]. The lock is a deadline:
//! each operation first settles the phase against the clock, so nothing has
//! to fire a callback when a transition ends.

mod state;


use std::fmt;

use exhibit_config::CarouselSettings;
use exhibit_model::{
    ControlState, IndicatorMarker, Slide, SlideFilter, SlideRole, StyleDirective, WrapMode,
};
use tracing::{debug, info};

pub use state::{IgnoreReason, NavOutcome, Phase, PollReport, SlideLayout};

use crate::autoplay::Autoplay;
use crate::clock::{Clock, MonotonicClock, duration_ms};
use crate::indicators;
use crate::input::{InputEvent, Intent, SwipeTracker, key_intent};
use crate::policy::{SlidePlacement, TransformPolicy};
use crate::surface::{CarouselSurface, NullSurface};
use crate::types::CarouselKey;

/// What a routed [`InputEvent`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Navigation(NavOutcome),
    /// The filter changed; `visible` slides now participate.
    Filtered { visible: usize },
    /// Escape asked the page to close an open detail view.
    CloseDetail,
    /// Styles were re-emitted without an index change.
    Relayout,
    Noop,
}

/// One carousel widget's navigation state.
pub struct Carousel<C: Clock = MonotonicClock> {
    key: CarouselKey,
    slides: Vec<Slide>,
    // Indices into `slides` selected by `filter`, in slide order.
    visible: Vec<usize>,
    filter: SlideFilter,
    active: Option<usize>,
    phase: Phase,
    settings: CarouselSettings,
    policy: Box<dyn TransformPolicy>,
    surface: Box<dyn CarouselSurface>,
    autoplay: Option<Autoplay>,
    swipe: SwipeTracker,
    clock: C,
    torn_down: bool,
}

impl Carousel<MonotonicClock> {
    /// Build a carousel on the real monotonic clock.
    pub fn new(
        key: CarouselKey,
        slides: Vec<Slide>,
        settings: CarouselSettings,
        policy: Box<dyn TransformPolicy>,
    ) -> Self {
        Self::with_clock(key, slides, settings, policy, MonotonicClock::new())
    }
}

impl<C: Clock> Carousel<C> {
    /// Build a carousel with an explicit clock. Nothing is rendered until a
    /// surface is attached with [`Carousel::with_surface`].
    pub fn with_clock(
        key: CarouselKey,
        slides: Vec<Slide>,
        settings: CarouselSettings,
        policy: Box<dyn TransformPolicy>,
        clock: C,
    ) -> Self {
        let now = clock.now_ms();
        let autoplay = settings.autoplay_interval().map(|interval| {
            let pause_on_hover = settings
                .autoplay
                .as_ref()
                .is_none_or(|autoplay| autoplay.pause_on_hover);
            Autoplay::new(interval, pause_on_hover, now)
        });
        let swipe = SwipeTracker::new(settings.swipe_threshold_px);
        let visible: Vec<usize> = (0..slides.len()).collect();
        let active = if visible.is_empty() { None } else { Some(0) };

        debug!(
            carousel = %key,
            slides = slides.len(),
            wrap = %settings.wrap_mode,
            scope = %settings.key_scope,
            autoplay = autoplay.is_some(),
            "carousel constructed"
        );

        Self {
            key,
            slides,
            visible,
            filter: SlideFilter::All,
            active,
            phase: Phase::Idle,
            settings,
            policy,
            surface: Box::new(NullSurface),
            autoplay,
            swipe,
            clock,
            torn_down: false,
        }
    }

    /// Attach a surface and emit the initial render to it.
    pub fn with_surface(mut self, surface: Box<dyn CarouselSurface>) -> Self {
        self.surface = surface;
        self.render_indicators();
        self.render_slides();
        self
    }

    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Active position among visible slides; `None` while nothing is visible.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn total_count(&self) -> usize {
        self.slides.len()
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.active
            .and_then(|position| self.visible.get(position))
            .and_then(|&slot| self.slides.get(slot))
    }

    pub fn filter(&self) -> &SlideFilter {
        &self.filter
    }

    /// Phase as of now, whether or not it has been settled yet.
    pub fn phase(&self) -> Phase {
        self.phase.at(self.clock.now_ms())
    }

    pub fn is_locked(&self) -> bool {
        self.phase().is_transitioning()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn autoplay(&self) -> Option<&Autoplay> {
        self.autoplay.as_ref()
    }

    pub fn indicators(&self) -> Vec<IndicatorMarker> {
        indicators::markers(
            self.visible.len(),
            self.active,
            &self.settings.indicator_label,
        )
    }

    pub fn controls(&self) -> ControlState {
        indicators::controls(self.visible.len(), self.active, self.settings.wrap_mode)
    }

    /// Role and style of every slide in snapshot order.
    pub fn layout(&self) -> Vec<SlideLayout> {
        let mut positions = vec![None; self.slides.len()];
        for (position, &slot) in self.visible.iter().enumerate() {
            positions[slot] = Some(position);
        }

        self.slides
            .iter()
            .zip(positions)
            .map(|(slide, position)| {
                let placement = position.zip(self.active).and_then(|(position, active)| {
                    SlideRole::resolve(position, active, self.visible.len()).map(|role| {
                        SlidePlacement {
                            position,
                            active,
                            visible: self.visible.len(),
                            role,
                        }
                    })
                });
                match placement {
                    Some(placement) => SlideLayout {
                        slide: slide.id,
                        position: Some(placement.position),
                        role: Some(placement.role),
                        style: self.policy.directive(&placement),
                    },
                    None => SlideLayout {
                        slide: slide.id,
                        position: None,
                        role: None,
                        style: StyleDirective::hidden(),
                    },
                }
            })
            .collect()
    }

    /// Navigate to a visible position.
    ///
    /// Ignored while locked, when `index` is already active, or when it lies
    /// outside the visible range. On success the lock is held for the
    /// configured transition.
    pub fn go_to(&mut self, index: usize) -> NavOutcome {
        if self.torn_down {
            return self.ignore(IgnoreReason::TornDown);
        }
        let now = self.clock.now_ms();
        self.settle_at(now);

        if self.phase.is_transitioning() {
            return self.ignore(IgnoreReason::Locked);
        }
        if self.active == Some(index) {
            return self.ignore(IgnoreReason::SameIndex);
        }
        let Some(from) = self.active.filter(|_| index < self.visible.len()) else {
            return self.ignore(IgnoreReason::OutOfRange);
        };

        self.active = Some(index);
        self.phase = Phase::Transitioning {
            since_ms: now,
            until_ms: now.saturating_add(duration_ms(self.settings.transition)),
        };
        debug!(carousel = %self.key, from, to = index, "navigated");

        self.render_slides();
        NavOutcome::Moved { from, to: index }
    }

    /// Advance one slide, wrapping or stopping at the end per the wrap mode.
    pub fn next(&mut self) -> NavOutcome {
        self.step(Step::Forward)
    }

    /// Step back one slide, wrapping or stopping at the start per the wrap mode.
    pub fn previous(&mut self) -> NavOutcome {
        self.step(Step::Backward)
    }

    fn step(&mut self, step: Step) -> NavOutcome {
        if self.torn_down {
            return self.ignore(IgnoreReason::TornDown);
        }
        self.settle_at(self.clock.now_ms());

        let count = self.visible.len();
        let Some(active) = self.active.filter(|_| count > 1) else {
            return self.ignore(IgnoreReason::TooFewSlides);
        };
        if self.phase.is_transitioning() {
            return self.ignore(IgnoreReason::Locked);
        }

        let target = match (self.settings.wrap_mode, step) {
            (WrapMode::Wrap, Step::Forward) => (active + 1) % count,
            (WrapMode::Wrap, Step::Backward) => (active + count - 1) % count,
            (WrapMode::Finite, Step::Forward) if active + 1 < count => active + 1,
            (WrapMode::Finite, Step::Backward) if active > 0 => active - 1,
            (WrapMode::Finite, _) => return self.ignore(IgnoreReason::AtBoundary),
        };
        self.go_to(target)
    }

    /// Slide click: an inactive slide is navigated to, the active one opens
    /// its detail view.
    pub fn activate(&mut self, position: usize) -> NavOutcome {
        if self.torn_down {
            return self.ignore(IgnoreReason::TornDown);
        }
        if self.active == Some(position) {
            if let Some(slide) = self.active_slide() {
                let id = slide.id;
                debug!(carousel = %self.key, slide = %id, "detail opened");
                return NavOutcome::DetailOpened(id);
            }
        }
        self.go_to(position)
    }

    /// Restrict navigation to slides matching `filter`.
    ///
    /// Not gated by the lock and does not itself take it: the active index
    /// resets to 0, indicators are regenerated and every slide is restyled.
    /// Returns the new visible count.
    pub fn set_filter(&mut self, filter: SlideFilter) -> usize {
        if self.torn_down {
            return self.visible.len();
        }
        self.filter = filter;
        self.refilter();
        debug!(
            carousel = %self.key,
            filter = %self.filter,
            visible = self.visible.len(),
            "filter applied"
        );
        self.visible.len()
    }

    /// Replace the slide snapshot after the underlying collection changed.
    /// The current filter is kept and the active index resets to 0.
    pub fn resync(&mut self, slides: Vec<Slide>) {
        if self.torn_down {
            return;
        }
        self.slides = slides;
        self.refilter();
        info!(
            carousel = %self.key,
            total = self.slides.len(),
            visible = self.visible.len(),
            "slides resynced"
        );
    }

    /// Re-emit every slide's style without touching the index or the lock.
    pub fn relayout(&mut self) {
        if self.torn_down {
            return;
        }
        self.render_slides();
    }

    /// Drive timer edges: release an expired lock, then let autoplay fire.
    pub fn poll(&mut self) -> PollReport {
        if self.torn_down {
            return PollReport::default();
        }
        let now = self.clock.now_ms();
        let settled = self.settle_at(now);
        let fired = self
            .autoplay
            .as_mut()
            .is_some_and(|autoplay| autoplay.poll(now));
        let autoplay = if fired {
            let outcome = self.next();
            debug!(carousel = %self.key, ?outcome, "autoplay tick");
            Some(outcome)
        } else {
            None
        };
        PollReport { settled, autoplay }
    }

    pub fn touch_start(&mut self, x: f32) {
        if !self.torn_down {
            self.swipe.touch_start(x);
        }
    }

    /// Finish a touch; returns the navigation attempted if the travel
    /// counted as a swipe.
    pub fn touch_end(&mut self, x: f32) -> Option<NavOutcome> {
        if self.torn_down {
            return None;
        }
        let direction = self.swipe.touch_end(x)?;
        match self.apply(Intent::from(direction)) {
            InputOutcome::Navigation(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn pointer_enter(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.pointer_enter();
        }
    }

    pub fn pointer_leave(&mut self) {
        let now = self.clock.now_ms();
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.pointer_leave(now);
        }
    }

    /// Page visibility changed (tab hidden or shown).
    pub fn set_hidden(&mut self, hidden: bool) {
        let now = self.clock.now_ms();
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.set_hidden(hidden, now);
        }
    }

    /// Carry out a navigation intent.
    pub fn apply(&mut self, intent: Intent) -> InputOutcome {
        match intent {
            Intent::Next => InputOutcome::Navigation(self.next()),
            Intent::Previous => InputOutcome::Navigation(self.previous()),
            Intent::GoTo(index) => InputOutcome::Navigation(self.go_to(index)),
            Intent::Activate(index) => InputOutcome::Navigation(self.activate(index)),
            Intent::SetFilter(filter) => InputOutcome::Filtered {
                visible: self.set_filter(filter),
            },
            Intent::CloseDetail => InputOutcome::CloseDetail,
        }
    }

    /// Translate a raw UI event and act on it.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::PrevButton => self.apply(Intent::Previous),
            InputEvent::NextButton => self.apply(Intent::Next),
            InputEvent::IndicatorClick(index) => self.apply(Intent::GoTo(index)),
            InputEvent::SlideClick(index) => self.apply(Intent::Activate(index)),
            InputEvent::TouchStart { x } => {
                self.touch_start(x);
                InputOutcome::Noop
            }
            InputEvent::TouchEnd { x } => self
                .touch_end(x)
                .map_or(InputOutcome::Noop, InputOutcome::Navigation),
            InputEvent::Key { key, in_region } => {
                match key_intent(key, in_region, self.settings.key_scope) {
                    Some(intent) => self.apply(intent),
                    None => InputOutcome::Noop,
                }
            }
            InputEvent::FilterSelected(filter) => self.apply(Intent::SetFilter(filter)),
            InputEvent::PointerEnter => {
                self.pointer_enter();
                InputOutcome::Noop
            }
            InputEvent::PointerLeave => {
                self.pointer_leave();
                InputOutcome::Noop
            }
            InputEvent::VisibilityChanged { hidden } => {
                self.set_hidden(hidden);
                InputOutcome::Noop
            }
            InputEvent::Resize => {
                if self.torn_down {
                    return InputOutcome::Noop;
                }
                self.relayout();
                InputOutcome::Relayout
            }
        }
    }

    /// Stop autoplay and detach the surface. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.stop();
        }
        self.surface = Box::new(NullSurface);
        self.torn_down = true;
        info!(carousel = %self.key, "carousel torn down");
    }

    fn settle_at(&mut self, now_ms: u64) -> bool {
        let settled = self.phase.is_transitioning() && !self.phase.at(now_ms).is_transitioning();
        if settled {
            self.phase = Phase::Idle;
            debug!(carousel = %self.key, "transition settled");
        }
        settled
    }

    fn ignore(&self, reason: IgnoreReason) -> NavOutcome {
        debug!(carousel = %self.key, %reason, "navigation ignored");
        NavOutcome::Ignored(reason)
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| filter.matches(slide))
            .map(|(slot, _)| slot)
            .collect();
        self.active = if self.visible.is_empty() { None } else { Some(0) };
        self.swipe = SwipeTracker::new(self.settings.swipe_threshold_px);
        self.render_indicators();
        self.render_slides();
    }

    fn render_indicators(&mut self) {
        let markers = self.indicators();
        self.surface.render_indicators(&markers);
    }

    fn render_slides(&mut self) {
        for entry in self.layout() {
            self.surface.apply_style(entry.slide, entry.role, &entry.style);
        }
        self.surface.highlight_indicator(self.active);
        let controls = self.controls();
        self.surface.update_controls(controls);
    }
}

#[derive(Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

impl<C: Clock> fmt::Debug for Carousel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("key", &self.key)
            .field("total", &self.slides.len())
            .field("visible", &self.visible.len())
            .field("filter", &self.filter)
            .field("active", &self.active)
            .field("phase", &self.phase)
            .field("policy", &self.policy)
            .field("autoplay", &self.autoplay)
            .field("clock", &self.clock)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

//! Page composition: the carousels of one exhibition page, explicitly owned.
//!
//! [`ExhibitPage`] replaces page-global carousel singletons. It mounts each
//! requested carousel from its slide provider, keeps the ones that could be
//! built, routes input and keyboard focus between them, debounces resizes and
//! tracks the detail view opened by clicking an active slide.
//!
//! A carousel that cannot be built (missing region, provider failure, no
//! slides) is logged and skipped; its region simply stays static.

use std::fmt;

use exhibit_config::{CarouselSettings, ExhibitConfig};
use exhibit_model::{KeyScope, SlideId};
use tracing::{debug, error, info, warn};

use crate::carousel::{Carousel, InputOutcome, NavOutcome, PollReport};
use crate::clock::{Clock, MonotonicClock};
use crate::debounce::Debouncer;
use crate::error::{CarouselError, Result};
use crate::focus::CarouselFocus;
use crate::input::{InputEvent, Key};
use crate::policy::TransformPolicy;
use crate::provider::SlideProvider;
use crate::registry::CarouselRegistry;
use crate::surface::{CarouselSurface, NullSurface};
use crate::types::CarouselKey;

/// Everything needed to mount one carousel.
pub struct CarouselMount {
    key: CarouselKey,
    provider: Box<dyn SlideProvider>,
    surface: Box<dyn CarouselSurface>,
    settings: Option<CarouselSettings>,
    policy: Option<Box<dyn TransformPolicy>>,
}

impl CarouselMount {
    pub fn new(key: CarouselKey, provider: impl SlideProvider + 'static) -> Self {
        Self {
            key,
            provider: Box::new(provider),
            surface: Box::new(NullSurface),
            settings: None,
            policy: None,
        }
    }

    pub fn gallery(provider: impl SlideProvider + 'static) -> Self {
        Self::new(CarouselKey::Gallery, provider)
    }

    pub fn workshop(provider: impl SlideProvider + 'static) -> Self {
        Self::new(CarouselKey::Workshop, provider)
    }

    pub fn with_surface(mut self, surface: impl CarouselSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    /// Use these settings instead of the ones the page config holds for the
    /// key. They are validated at mount; a guard-rail failure leaves this
    /// carousel static.
    pub fn with_settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_policy(mut self, policy: impl TransformPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    fn build<C: Clock>(self, config: &ExhibitConfig, clock: C) -> Result<Carousel<C>> {
        let slides = self.provider.slides(&self.key)?;
        if slides.is_empty() {
            return Err(CarouselError::NoSlides { key: self.key });
        }
        let settings = match self.settings {
            // Page config was validated as a whole at mount; per-mount
            // settings get the same guard rails here.
            Some(settings) => {
                settings.validate(self.key.name())?.log();
                settings
            }
            None => match &self.key {
                CarouselKey::Gallery => config.gallery.clone(),
                CarouselKey::Workshop => config.workshop.clone(),
                CarouselKey::Custom(_) => CarouselSettings::default(),
            },
        };
        let policy = self.policy.unwrap_or_else(|| self.key.default_policy());
        Ok(Carousel::with_clock(self.key, slides, settings, policy, clock).with_surface(self.surface))
    }
}

impl fmt::Debug for CarouselMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselMount")
            .field("key", &self.key)
            .field("settings", &self.settings)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// The slide whose detail view is open, and the carousel it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDetail {
    pub carousel: CarouselKey,
    pub slide: SlideId,
}

/// Timer edges observed by one [`ExhibitPage::poll`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTick {
    /// The resize debounce fired and every carousel was re-laid out.
    pub relaid_out: bool,
    pub carousels: Vec<(CarouselKey, PollReport)>,
}

/// The interactive carousels of a single page.
#[derive(Debug)]
pub struct ExhibitPage<C: Clock + Clone = MonotonicClock> {
    registry: CarouselRegistry<C>,
    focus: CarouselFocus,
    resize: Debouncer,
    detail: Option<OpenDetail>,
    clock: C,
    unmounted: bool,
}

impl ExhibitPage<MonotonicClock> {
    /// Mount on the real clock.
    pub fn mount(config: &ExhibitConfig, mounts: Vec<CarouselMount>) -> Result<Self> {
        Self::mount_with_clock(config, mounts, MonotonicClock::new())
    }
}

impl<C: Clock + Clone> ExhibitPage<C> {
    /// Validate `config` and mount every carousel that can be built.
    ///
    /// Only a config guard-rail failure is an error; per-carousel failures
    /// are logged and leave that carousel out.
    pub fn mount_with_clock(
        config: &ExhibitConfig,
        mounts: Vec<CarouselMount>,
        clock: C,
    ) -> Result<Self> {
        let warnings = config.validate()?;
        warnings.log();

        let mut registry = CarouselRegistry::new();
        for mount in mounts {
            let key = mount.key().clone();
            match mount.build(config, clock.clone()) {
                Ok(carousel) => {
                    info!(
                        carousel = %key,
                        slides = carousel.total_count(),
                        "carousel mounted"
                    );
                    registry.insert(carousel);
                }
                Err(err) => {
                    error!(carousel = %key, error = %err, "carousel left static");
                }
            }
        }
        if registry.is_empty() {
            warn!("no interactive carousels on this page");
        }

        Ok(Self {
            registry,
            focus: CarouselFocus::new(),
            resize: Debouncer::new(config.resize_debounce),
            detail: None,
            clock,
            unmounted: false,
        })
    }

    pub fn carousel(&self, key: &CarouselKey) -> Option<&Carousel<C>> {
        self.registry.get(key)
    }

    pub fn carousel_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel<C>> {
        self.registry.get_mut(key)
    }

    pub fn is_mounted(&self, key: &CarouselKey) -> bool {
        !self.unmounted && self.registry.contains(key)
    }

    pub fn focus(&self) -> &CarouselFocus {
        &self.focus
    }

    pub fn open_detail(&self) -> Option<&OpenDetail> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) -> Option<OpenDetail> {
        let closed = self.detail.take();
        if let Some(detail) = &closed {
            debug!(carousel = %detail.carousel, slide = %detail.slide, "detail closed");
        }
        closed
    }

    /// Route an event raised inside one carousel's region.
    ///
    /// Resizes go through the page debounce instead of relaying out at once.
    pub fn dispatch(&mut self, key: &CarouselKey, event: InputEvent) -> Option<InputOutcome> {
        if !self.is_mounted(key) {
            return None;
        }
        match &event {
            InputEvent::PointerEnter => self.focus.set_hovered(key.clone()),
            InputEvent::PointerLeave => self.focus.clear_hover(key),
            InputEvent::PrevButton
            | InputEvent::NextButton
            | InputEvent::IndicatorClick(_)
            | InputEvent::SlideClick(_) => self.focus.set_keyboard_active(key.clone()),
            InputEvent::Resize => {
                self.resize();
                return Some(InputOutcome::Noop);
            }
            _ => {}
        }

        let outcome = self.registry.dispatch(key, event)?;
        match outcome {
            InputOutcome::Navigation(NavOutcome::DetailOpened(slide)) => {
                self.detail = Some(OpenDetail {
                    carousel: key.clone(),
                    slide,
                });
            }
            InputOutcome::CloseDetail => {
                self.close_detail();
            }
            _ => {}
        }
        Some(outcome)
    }

    /// A key press anywhere on the page. `region` names the carousel whose
    /// region the event originated in, if any.
    ///
    /// Escape closes the open detail view. Arrows go to every page-wide
    /// carousel, and to a region-scoped carousel when the event came from its
    /// region or it holds keyboard focus. Returns the carousels that reacted,
    /// in key order.
    pub fn key_down(
        &mut self,
        key: Key,
        region: Option<&CarouselKey>,
    ) -> Vec<(CarouselKey, InputOutcome)> {
        if self.unmounted {
            return Vec::new();
        }
        if key == Key::Escape {
            return self
                .close_detail()
                .map(|detail| vec![(detail.carousel, InputOutcome::CloseDetail)])
                .unwrap_or_default();
        }

        let targets: Vec<(CarouselKey, bool)> = self
            .registry
            .iter()
            .filter_map(|(target, carousel)| {
                let in_region = region == Some(target) || self.focus.is_active(target);
                match carousel.settings().key_scope {
                    KeyScope::Global => Some((target.clone(), in_region)),
                    KeyScope::Region if in_region => Some((target.clone(), true)),
                    KeyScope::Region => None,
                }
            })
            .collect();

        targets
            .into_iter()
            .filter_map(|(target, in_region)| {
                let outcome = self
                    .registry
                    .dispatch(&target, InputEvent::Key { key, in_region })?;
                (outcome != InputOutcome::Noop).then_some((target, outcome))
            })
            .collect()
    }

    /// Tear down one carousel whose region left the page. Keyboard focus and
    /// an open detail view belonging to it are dropped too.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel<C>> {
        let removed = self.registry.remove(key)?;
        self.focus.forget(key);
        if self
            .detail
            .as_ref()
            .is_some_and(|detail| &detail.carousel == key)
        {
            self.detail = None;
        }
        info!(carousel = %key, "carousel removed");
        Some(removed)
    }

    /// Record a window resize; the re-layout happens on a later poll.
    pub fn resize(&mut self) {
        if !self.unmounted {
            self.resize.trigger(self.clock.now_ms());
        }
    }

    /// Page visibility changed; pauses or resumes every autoplay timer.
    pub fn set_hidden(&mut self, hidden: bool) {
        if !self.unmounted {
            self.registry.set_hidden_all(hidden);
        }
    }

    /// Drive every timer on the page.
    pub fn poll(&mut self) -> PageTick {
        if self.unmounted {
            return PageTick::default();
        }
        let relaid_out = self.resize.poll(self.clock.now_ms());
        if relaid_out {
            debug!(carousels = self.registry.len(), "resize settled, relaying out");
            self.registry.relayout_all();
        }
        PageTick {
            relaid_out,
            carousels: self.registry.poll_all(),
        }
    }

    /// Tear everything down when the page goes away.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.registry.teardown_all();
        self.resize.cancel();
        self.focus.clear_all();
        self.detail = None;
        self.unmounted = true;
        info!("exhibit page unmounted");
    }
}

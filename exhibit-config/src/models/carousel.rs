use std::time::Duration;

use exhibit_model::{KeyScope, WrapMode};
use serde::{Deserialize, Serialize};

/// Transition length observed on both exhibition carousels.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(800);
/// Minimum horizontal travel (px) before a touch counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;
/// Gallery autoplay cadence.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5_000);

/// Automatic advance settings for a carousel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AutoplaySettings {
    /// Set to false to keep the section but switch autoplay off.
    pub enabled: bool,
    /// Time between automatic advances.
    #[serde(with = "crate::util::duration")]
    pub interval: Duration,
    /// Hold autoplay while the pointer rests on the carousel.
    pub pause_on_hover: bool,
}

impl Default for AutoplaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: DEFAULT_AUTOPLAY_INTERVAL,
            pause_on_hover: true,
        }
    }
}

/// Resolved settings for a single carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSettings {
    /// How long the animation lock is held after a successful navigation.
    #[serde(with = "crate::util::duration")]
    pub transition: Duration,
    /// Circular or clamped boundaries for next/previous.
    pub wrap_mode: WrapMode,
    /// Minimum touch travel in pixels for a swipe; shorter drags are noise.
    pub swipe_threshold_px: f32,
    /// Whether arrow keys are taken page-wide or only inside the carousel.
    pub key_scope: KeyScope,
    /// Automatic advance, if any.
    pub autoplay: Option<AutoplaySettings>,
    /// Prefix for indicator marker labels ("Go to Week" -> "Go to Week 3").
    pub indicator_label: String,
}

impl CarouselSettings {
    /// Artwork gallery: circular, page-wide arrows, 5s autoplay.
    pub fn gallery() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            wrap_mode: WrapMode::Wrap,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            key_scope: KeyScope::Global,
            autoplay: Some(AutoplaySettings::default()),
            indicator_label: "Go to slide".to_string(),
        }
    }

    /// Workshop timeline: clamped at the first/last week, arrows only while
    /// the timeline region has focus, no autoplay.
    pub fn workshop() -> Self {
        Self {
            transition: DEFAULT_TRANSITION,
            wrap_mode: WrapMode::Finite,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            key_scope: KeyScope::Region,
            autoplay: None,
            indicator_label: "Go to Week".to_string(),
        }
    }

    /// Effective autoplay interval, `None` when autoplay is off.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.autoplay
            .as_ref()
            .filter(|autoplay| autoplay.enabled)
            .map(|autoplay| autoplay.interval)
    }

    /// Layer file overrides on top of these settings.
    pub fn apply(&mut self, overrides: CarouselOverrides) {
        if let Some(transition) = overrides.transition {
            self.transition = transition;
        }
        if let Some(wrap_mode) = overrides.wrap_mode {
            self.wrap_mode = wrap_mode;
        }
        if let Some(threshold) = overrides.swipe_threshold_px {
            self.swipe_threshold_px = threshold;
        }
        if let Some(scope) = overrides.key_scope {
            self.key_scope = scope;
        }
        if let Some(autoplay) = overrides.autoplay {
            self.autoplay = Some(autoplay);
        }
        if let Some(label) = overrides.indicator_label {
            self.indicator_label = label;
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::gallery()
    }
}

/// Partial carousel settings as written in a config file. Every field is
/// optional so a file only has to mention what it changes.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CarouselOverrides {
    #[serde(default, deserialize_with = "crate::util::duration_opt::deserialize")]
    pub transition: Option<Duration>,
    pub wrap_mode: Option<WrapMode>,
    pub swipe_threshold_px: Option<f32>,
    pub key_scope: Option<KeyScope>,
    pub autoplay: Option<AutoplaySettings>,
    pub indicator_label: Option<String>,
}

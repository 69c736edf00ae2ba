//! Guard rails for loaded configuration.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Hard validation failures; the configuration cannot be used as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error("{carousel}: transition must be longer than zero")]
    ZeroTransition { carousel: &'static str },

    #[error(
        "{carousel}: swipe threshold must be a finite, non-negative pixel distance (got {value})"
    )]
    InvalidSwipeThreshold { carousel: &'static str, value: f32 },

    #[error("{carousel}: autoplay interval must be longer than zero")]
    ZeroAutoplayInterval { carousel: &'static str },

    #[error("resize debounce must be longer than zero")]
    ZeroResizeDebounce,
}

/// Legal but suspicious settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    AutoplayWithinTransition {
        carousel: &'static str,
        interval: Duration,
        transition: Duration,
    },
    EmptyIndicatorLabel {
        carousel: &'static str,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::AutoplayWithinTransition {
                carousel,
                interval,
                transition,
            } => write!(
                f,
                "{carousel}: autoplay interval {interval:?} does not exceed the {transition:?} transition; autoplay ticks will be dropped"
            ),
            ConfigWarning::EmptyIndicatorLabel { carousel } => {
                write!(f, "{carousel}: indicator label is empty")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Emit every warning through `tracing`.
    pub fn log(&self) {
        for warning in &self.0 {
            warn!(%warning, "exhibit config warning");
        }
    }
}

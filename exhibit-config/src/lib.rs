//! Shared configuration library for the exhibit carousels.
//!
//! Centralizes the per-carousel settings (transition length, wrap mode,
//! swipe threshold, keyboard scope, autoplay cadence), the page-level resize
//! debounce, where those values are loaded from, and the guard rails that
//! reject values the engine cannot honour.

pub mod models;
pub mod util;
pub mod validation;

pub use models::carousel::{AutoplaySettings, CarouselSettings};
pub use models::{ConfigSource, ExhibitConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

//! Core data model definitions shared across the exhibit crates.
//!
//! Everything here is plain data: slide handles, filters, positional roles,
//! the style directive handed to renderers and the indicator/control
//! snapshots handed to widgets. Behaviour lives in `exhibit-core`.
#![allow(missing_docs)]

pub mod error;
pub mod filter;
pub mod ids;
pub mod indicator;
pub mod modes;
pub mod role;
pub mod slide;
pub mod style;

pub use error::{ModelError, Result as ModelResult};
pub use filter::SlideFilter;
pub use ids::SlideId;
pub use indicator::{ControlState, IndicatorMarker};
pub use modes::{KeyScope, WrapMode};
pub use role::SlideRole;
pub use slide::{Category, Slide};
pub use style::StyleDirective;

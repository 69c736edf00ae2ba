use std::fmt::{self, Display};

/// Boundary behaviour for `next`/`previous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrapMode {
    /// Circular: advancing past the last slide returns to the first.
    #[default]
    Wrap,
    /// Clamped: stepping past either end is ignored.
    Finite,
}

impl Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapMode::Wrap => f.write_str("wrap"),
            WrapMode::Finite => f.write_str("finite"),
        }
    }
}

/// Where arrow keys are accepted for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyScope {
    /// Arrow keys anywhere on the page drive this carousel.
    #[default]
    Global,
    /// Only arrow keys raised inside the carousel's own region count.
    Region,
}

impl Display for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyScope::Global => f.write_str("global"),
            KeyScope::Region => f.write_str("region"),
        }
    }
}

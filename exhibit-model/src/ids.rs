use std::fmt::{self, Display};

/// Stable handle for one slide, assigned by the slide provider.
///
/// The id survives filtering and re-syncs; positions do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideId(pub u32);

impl SlideId {
    pub const fn new(raw: u32) -> Self {
        SlideId(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

impl From<u32> for SlideId {
    fn from(value: u32) -> Self {
        SlideId(value)
    }
}

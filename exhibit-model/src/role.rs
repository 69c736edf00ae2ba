use std::fmt::{self, Display};

/// A slide's position relative to the active slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlideRole {
    Active,
    Prev,
    Next,
    Far,
}

impl SlideRole {
    /// Resolve the role of the slide at visible `position`.
    ///
    /// Adjacency is circular: with the first slide active the last slide is
    /// `Prev`, and with the last slide active the first is `Next`. When only
    /// two slides are visible the neighbour resolves to `Prev`.
    ///
    /// Returns `None` when nothing is visible or `position`/`active` fall
    /// outside `0..visible`.
    pub fn resolve(position: usize, active: usize, visible: usize) -> Option<Self> {
        if visible == 0 || position >= visible || active >= visible {
            return None;
        }
        let offset = (position + visible - active) % visible;
        let role = if offset == 0 {
            SlideRole::Active
        } else if offset == visible - 1 {
            SlideRole::Prev
        } else if offset == 1 {
            SlideRole::Next
        } else {
            SlideRole::Far
        };
        Some(role)
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            SlideRole::Active => "active",
            SlideRole::Prev => "prev",
            SlideRole::Next => "next",
            SlideRole::Far => "far",
        }
    }

    pub fn is_adjacent(&self) -> bool {
        matches!(self, SlideRole::Prev | SlideRole::Next)
    }
}

impl Display for SlideRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

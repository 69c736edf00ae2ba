/// One clickable marker in an indicator row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorMarker {
    /// Visible position this marker navigates to.
    pub position: usize,
    pub active: bool,
    /// Accessible label, e.g. "Go to Week 3".
    pub label: String,
}

/// Enabled state of the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlState {
    pub can_previous: bool,
    pub can_next: bool,
}

impl ControlState {
    pub const DISABLED: ControlState = ControlState {
        can_previous: false,
        can_next: false,
    };
}

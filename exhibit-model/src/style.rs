/// Visual directive for one slide, applied by the external renderer.
///
/// `transform` is a ready-to-apply CSS transform string; renderers that do
/// not speak CSS can use the numeric fields of the owning policy instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleDirective {
    pub transform: String,
    pub opacity: f32,
    pub z_index: i32,
    /// False when the slide is filtered out and must not be displayed.
    pub visible: bool,
    /// Whether the slide should be reachable by keyboard focus.
    pub focusable: bool,
}

impl StyleDirective {
    pub fn new(transform: impl Into<String>, opacity: f32, z_index: i32) -> Self {
        Self {
            transform: transform.into(),
            opacity,
            z_index,
            visible: true,
            focusable: true,
        }
    }

    /// Directive for a slide excluded by the active filter.
    pub fn hidden() -> Self {
        Self {
            transform: String::new(),
            opacity: 0.0,
            z_index: 0,
            visible: false,
            focusable: false,
        }
    }

    pub fn unfocusable(mut self) -> Self {
        self.focusable = false;
        self
    }
}

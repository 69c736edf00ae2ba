//! Indicator row derivation.

use exhibit_model::{ControlState, IndicatorMarker, WrapMode};

/// Build one marker per visible slide, flagging `active`.
pub fn markers(visible: usize, active: Option<usize>, label_prefix: &str) -> Vec<IndicatorMarker> {
    (0..visible)
        .map(|position| IndicatorMarker {
            position,
            active: active == Some(position),
            label: format!("{} {}", label_prefix.trim_end(), position + 1),
        })
        .collect()
}

/// Whether previous/next can currently do anything, ignoring the lock.
pub fn controls(visible: usize, active: Option<usize>, wrap: WrapMode) -> ControlState {
    let Some(active) = active else {
        return ControlState::DISABLED;
    };
    if visible <= 1 {
        return ControlState::DISABLED;
    }
    match wrap {
        WrapMode::Wrap => ControlState {
            can_previous: true,
            can_next: true,
        },
        WrapMode::Finite => ControlState {
            can_previous: active > 0,
            can_next: active + 1 < visible,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_marker_is_active() {
        let row = markers(4, Some(2), "Go to Week");
        assert_eq!(row.len(), 4);
        assert_eq!(row.iter().filter(|m| m.active).count(), 1);
        assert!(row[2].active);
        assert_eq!(row[2].label, "Go to Week 3");
    }

    #[test]
    fn empty_collection_has_no_markers() {
        assert!(markers(0, None, "Go to slide").is_empty());
    }

    #[test]
    fn finite_controls_disable_at_the_ends() {
        let first = controls(3, Some(0), WrapMode::Finite);
        assert!(!first.can_previous && first.can_next);
        let last = controls(3, Some(2), WrapMode::Finite);
        assert!(last.can_previous && !last.can_next);
    }

    #[test]
    fn single_slide_disables_both_controls() {
        assert_eq!(controls(1, Some(0), WrapMode::Wrap), ControlState::DISABLED);
    }
}

//! Edit modes and the cyclic action selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::volume::Axis;

/// What a click does to the targeted volume. Declaration order is the
/// cycling order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMode {
    #[default]
    Select,
    Delete,
    Duplicate,
    SliceX,
    SliceY,
    SliceZ,
    Subdivide,
    Stretch,
}

impl ActionMode {
    pub const ALL: [ActionMode; 8] = [
        ActionMode::Select,
        ActionMode::Delete,
        ActionMode::Duplicate,
        ActionMode::SliceX,
        ActionMode::SliceY,
        ActionMode::SliceZ,
        ActionMode::Subdivide,
        ActionMode::Stretch,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Step through the modes, wrapping at both ends.
    pub fn cycle(self, step: i32) -> ActionMode {
        let len = Self::ALL.len() as i32;
        let next = (self.index() as i32 + step.rem_euclid(len)).rem_euclid(len);
        Self::ALL[next as usize]
    }

    /// Modes that may target a fixed volume
    pub fn allowed_on_fixed(self) -> bool {
        matches!(self, ActionMode::Select | ActionMode::Duplicate)
    }

    /// Axis cut by a slice mode
    pub fn slice_axis(self) -> Option<Axis> {
        match self {
            ActionMode::SliceX => Some(Axis::X),
            ActionMode::SliceY => Some(Axis::Y),
            ActionMode::SliceZ => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionMode::Select => "select",
            ActionMode::Delete => "delete",
            ActionMode::Duplicate => "duplicate",
            ActionMode::SliceX => "slice x",
            ActionMode::SliceY => "slice y",
            ActionMode::SliceZ => "slice z",
            ActionMode::Subdivide => "subdivide",
            ActionMode::Stretch => "stretch",
        }
    }
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Holds the active mode. Changing it is reported so the caller can drop
/// the selection that belonged to the old mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionSelector {
    mode: ActionMode,
}

impl ActionSelector {
    pub fn new(mode: ActionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    /// Advance by `step` and return the new mode.
    pub fn cycle(&mut self, step: i32) -> ActionMode {
        self.mode = self.mode.cycle(step);
        self.mode
    }

    /// Returns `true` if the mode actually changed.
    pub fn set(&mut self, mode: ActionMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_forward_wraps() {
        assert_eq!(ActionMode::Select.cycle(1), ActionMode::Delete);
        assert_eq!(ActionMode::Stretch.cycle(1), ActionMode::Select);
    }

    #[test]
    fn test_cycle_backward_wraps() {
        assert_eq!(ActionMode::ALL[0].cycle(-1), ActionMode::ALL[7]);
        assert_eq!(ActionMode::Delete.cycle(-1), ActionMode::Select);
        assert_eq!(ActionMode::Select.cycle(-17), ActionMode::Stretch);
    }

    #[test]
    fn test_cycle_extreme_steps() {
        // i32::MAX = 8 * 268435455 + 7, i32::MIN = -8 * 268435456
        assert_eq!(ActionMode::Stretch.cycle(i32::MAX), ActionMode::Subdivide);
        assert_eq!(ActionMode::Select.cycle(i32::MAX), ActionMode::Stretch);
        assert_eq!(ActionMode::Stretch.cycle(i32::MIN), ActionMode::Stretch);
        assert_eq!(ActionMode::Delete.cycle(i32::MIN + 1), ActionMode::Duplicate);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        for mode in ActionMode::ALL {
            assert_eq!(mode.cycle(8), mode);
            assert_eq!(mode.cycle(1).cycle(-1), mode);
            assert_eq!(ActionMode::ALL[mode.index()], mode);
        }
    }

    #[test]
    fn test_selector() {
        let mut selector = ActionSelector::default();
        assert_eq!(selector.mode(), ActionMode::Select);
        assert_eq!(selector.cycle(-1), ActionMode::Stretch);
        assert!(!selector.set(ActionMode::Stretch));
        assert!(selector.set(ActionMode::SliceY));
        assert_eq!(selector.mode().slice_axis(), Some(Axis::Y));
    }

    #[test]
    fn test_labels_and_serde_names() {
        assert_eq!(ActionMode::SliceX.to_string(), "slice x");
        assert_eq!(serde_json::to_string(&ActionMode::SliceZ).unwrap(), "\"slice_z\"");
        assert!(ActionMode::Duplicate.allowed_on_fixed());
        assert!(!ActionMode::Delete.allowed_on_fixed());
    }
}

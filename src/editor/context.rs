//! Mutable editor state shared by every input handler.

use crate::edit::{ActionMode, ActionSelector};
use crate::hover::HoverState;
use crate::math::Ray;
use crate::volume::VolumeRegistry;

use super::inspector::Inspector;
use super::selection::Selection;

/// Everything the handlers read and write, passed around explicitly
/// instead of living in globals.
#[derive(Debug, Default)]
pub struct EditorContext {
    pub registry: VolumeRegistry,
    pub hover: HoverState,
    pub selector: ActionSelector,
    pub selection: Selection,
    pub inspector: Inspector,
    /// Last pointer ray; re-cast after every membership change
    pub pointer: Option<Ray>,
    /// Set by a drag, swallowed by the next click
    pub cancel_click: bool,
    /// Multi-select modifier (Shift) held
    pub multi_select: bool,
    /// Something visible changed since the last rendered frame
    pub needs_redraw: bool,
}

impl EditorContext {
    pub fn new(mode: ActionMode) -> Self {
        Self {
            selector: ActionSelector::new(mode),
            needs_redraw: true,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> ActionMode {
        self.selector.mode()
    }

    /// Read and reset the click-cancel flag in one step
    pub fn take_cancel(&mut self) -> bool {
        std::mem::take(&mut self.cancel_click)
    }
}

//! Hover highlight bookkeeping.
//!
//! Pointer moves only record what changed (`transition`). Once per render
//! tick `consume` restores every face recorded in `previous` and then tints
//! `current`. A burst of moves between ticks therefore converges to one
//! highlighted face with every other face restored.

use log::trace;

use crate::pick::{PickResult, PickTarget};
use crate::volume::{Face, Rgb, VolumeId, VolumeRegistry};

/// A hovered face plus its persisted colour captured before tinting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEntry {
    pub id: VolumeId,
    pub face: Face,
    pub color: Rgb,
}

impl HoverEntry {
    pub fn target(&self) -> PickTarget {
        PickTarget { id: self.id, face: self.face }
    }
}

/// What `consume` did to the registry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverRepaint {
    pub restored: usize,
    pub highlighted: bool,
    /// Entries whose volume had already been removed
    pub skipped: usize,
}

impl HoverRepaint {
    pub fn changed(&self) -> bool {
        self.restored > 0 || self.highlighted
    }
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
    current: Option<HoverEntry>,
    previous: Vec<HoverEntry>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&HoverEntry> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> &[HoverEntry] {
        &self.previous
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Feed a fresh pick. Returns `false` when it matches `current` exactly,
    /// in which case nothing changes.
    pub fn transition(&mut self, pick: PickResult, registry: &VolumeRegistry) -> bool {
        if self.current.map(|c| c.target()) == pick.target {
            return false;
        }

        if let Some(old) = self.current.take() {
            self.previous.push(old);
        }

        // The pick may name a volume that vanished since it was resolved.
        self.current = pick.target.and_then(|target| {
            registry.face_color(target.id, target.face).map(|color| HoverEntry {
                id: target.id,
                face: target.face,
                color,
            })
        });

        trace!("hover -> {:?} ({} pending restores)", self.current.map(|c| c.target()), self.previous.len());
        true
    }

    /// Apply pending restores, then tint `current` with `highlight`.
    /// Entries naming removed volumes are skipped.
    pub fn consume(&mut self, registry: &mut VolumeRegistry, highlight: Rgb) -> HoverRepaint {
        let mut repaint = HoverRepaint::default();

        for entry in self.previous.drain(..) {
            match registry.get_mut(entry.id) {
                Some(volume) => {
                    volume.colors.clear_overlay(entry.face.index());
                    repaint.restored += 1;
                }
                None => repaint.skipped += 1,
            }
        }

        if let Some(entry) = self.current {
            match registry.get_mut(entry.id) {
                Some(volume) => {
                    volume.colors.set_overlay(entry.face.index(), highlight);
                    repaint.highlighted = true;
                }
                None => repaint.skipped += 1,
            }
        }

        repaint
    }

    /// Forget `current` so the next pick re-registers it; used after the
    /// registry changed under the pointer.
    pub fn release(&mut self) {
        if let Some(old) = self.current.take() {
            self.previous.push(old);
        }
    }
}

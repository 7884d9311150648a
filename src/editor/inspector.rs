//! Face colour inspector: picks a face slot and repaints it on the first
//! selected volume.

use log::warn;

use crate::volume::{EditError, Face, Rgb, VolumeId, VolumeRegistry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inspector {
    active_slot: usize,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    pub fn set_active_slot(&mut self, slot: u8) -> Result<(), EditError> {
        self.active_slot = Face::new(slot)?.index();
        Ok(())
    }

    /// Persisted colour shown for the active slot of `id`
    pub fn shown_color(&self, id: VolumeId, registry: &VolumeRegistry) -> Option<Rgb> {
        registry.get(id).map(|v| v.colors.base(self.active_slot))
    }

    /// Paint `hex` onto the persisted colour of the active slot of `id`.
    /// Returns `false` for malformed input or a missing volume.
    pub fn apply_hex(&self, id: VolumeId, hex: &str, registry: &mut VolumeRegistry) -> bool {
        let Some(color) = Rgb::parse_hex(hex) else {
            warn!("ignoring colour {hex:?}: expected six hex digits");
            return false;
        };
        match registry.get_mut(id) {
            Some(volume) => {
                volume.colors.set_base(self.active_slot, color);
                true
            }
            None => false,
        }
    }
}

//! Selected volumes and their outline overlays.

use serde::Serialize;

use crate::math::Aabb;
use crate::volume::{Rgb, VolumeId, VolumeRegistry};

/// Outline drawn around a selected volume. Not pickable.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Outline {
    pub id: VolumeId,
    pub bounds: Aabb,
    pub color: Rgb,
}

/// Ordered selection; outlines are kept in step with `ids`.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    ids: Vec<VolumeId>,
    outlines: Vec<Outline>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[VolumeId] {
        &self.ids
    }

    pub fn outlines(&self) -> &[Outline] {
        &self.outlines
    }

    pub fn first(&self) -> Option<VolumeId> {
        self.ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: VolumeId) -> bool {
        self.ids.contains(&id)
    }

    /// Append `id` with an outline around its current bounds. Unknown ids
    /// are ignored; re-selecting an id already present is a no-op.
    pub fn push(&mut self, id: VolumeId, registry: &VolumeRegistry, color: Rgb) -> bool {
        if self.contains(id) {
            return false;
        }
        let Some(volume) = registry.get(id) else {
            return false;
        };
        self.ids.push(id);
        self.outlines.push(Outline {
            id,
            bounds: volume.aabb(),
            color,
        });
        true
    }

    /// Drop everything. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had = !self.ids.is_empty();
        self.ids.clear();
        self.outlines.clear();
        had
    }

    /// Forget volumes that are no longer registered
    pub fn retain_live(&mut self, registry: &VolumeRegistry) {
        self.ids.retain(|id| registry.contains(*id));
        self.outlines.retain(|o| registry.contains(o.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::volume::{FaceColors, Volume};

    #[test]
    fn test_push_and_clear() {
        let mut registry = VolumeRegistry::new();
        let a = registry.insert(Volume::cube(Vec3::ZERO, FaceColors::uniform(Rgb::PLUM)));
        let b = registry.insert(Volume::cube(Vec3::X, FaceColors::uniform(Rgb::PLUM)));

        let mut selection = Selection::new();
        assert!(selection.push(b, &registry, Rgb::CYAN_OUTLINE));
        assert!(selection.push(a, &registry, Rgb::CYAN_OUTLINE));
        assert!(!selection.push(a, &registry, Rgb::CYAN_OUTLINE));
        assert!(!selection.push(VolumeId(42), &registry, Rgb::CYAN_OUTLINE));

        assert_eq!(selection.ids(), &[b, a]);
        assert_eq!(selection.first(), Some(b));
        assert_eq!(selection.outlines()[0].bounds, registry.get(b).unwrap().aabb());

        assert!(selection.clear());
        assert!(selection.outlines().is_empty());
        assert!(!selection.clear());
    }

    #[test]
    fn test_retain_live() {
        let mut registry = VolumeRegistry::new();
        let a = registry.insert(Volume::cube(Vec3::ZERO, FaceColors::uniform(Rgb::PLUM)));
        let b = registry.insert(Volume::cube(Vec3::X, FaceColors::uniform(Rgb::PLUM)));
        let mut selection = Selection::new();
        selection.push(a, &registry, Rgb::CYAN_OUTLINE);
        selection.push(b, &registry, Rgb::CYAN_OUTLINE);

        registry.remove(a);
        selection.retain_live(&registry);
        assert_eq!(selection.ids(), &[b]);
        assert_eq!(selection.outlines().len(), 1);
    }
}

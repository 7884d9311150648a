//! Edit engine: turns (mode, volume, face) into a remove/add pair and
//! commits it to the registry in one step.

use log::debug;

use crate::pick::PickTarget;
use crate::volume::geometry;
use crate::volume::{Axis, EditError, Face, Volume, VolumeId, VolumeRegistry};

use super::mode::ActionMode;

/// Geometry change computed for one click, not yet applied
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditPlan {
    pub remove: Vec<VolumeId>,
    pub add: Vec<Volume>,
    /// Set by `select`, which changes no geometry
    pub select: Option<VolumeId>,
}

impl EditPlan {
    pub fn is_geometry_change(&self) -> bool {
        !self.remove.is_empty() || !self.add.is_empty()
    }
}

/// Result of a committed edit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    pub mode: ActionMode,
    pub target: VolumeId,
    pub removed: Vec<VolumeId>,
    pub added: Vec<VolumeId>,
    pub selected: Option<VolumeId>,
}

impl EditOutcome {
    /// Registry membership changed, so any cached pick is stale
    pub fn invalidates_pick(&self) -> bool {
        !self.removed.is_empty() || !self.added.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditEngine {
    /// Distance a stretched face moves outward
    pub stretch_increment: f32,
    /// Refuse to delete the only remaining editable volume
    pub protect_last_editable: bool,
}

impl Default for EditEngine {
    fn default() -> Self {
        Self {
            stretch_increment: 1.0,
            protect_last_editable: false,
        }
    }
}

impl EditEngine {
    pub fn new(stretch_increment: f32, protect_last_editable: bool) -> Self {
        Self { stretch_increment, protect_last_editable }
    }

    /// Compute what `mode` would do to `volume` at `face`.
    ///
    /// Fixed volumes only accept select and duplicate; anything else is
    /// refused with `FixedVolume`.
    pub fn plan(&self, mode: ActionMode, volume: &Volume, face: Face) -> Result<EditPlan, EditError> {
        if volume.fixed && !mode.allowed_on_fixed() {
            return Err(EditError::FixedVolume(volume.id));
        }

        let replace = |add: Vec<Volume>| EditPlan {
            remove: vec![volume.id],
            add,
            select: None,
        };

        let plan = match mode {
            ActionMode::Select => EditPlan {
                select: Some(volume.id),
                ..Default::default()
            },
            ActionMode::Delete => replace(Vec::new()),
            ActionMode::SliceX => replace(geometry::slice(volume, Axis::X)?.into()),
            ActionMode::SliceY => replace(geometry::slice(volume, Axis::Y)?.into()),
            ActionMode::SliceZ => replace(geometry::slice(volume, Axis::Z)?.into()),
            ActionMode::Subdivide => replace(geometry::subdivide(volume)?.into()),
            ActionMode::Stretch => {
                replace(vec![geometry::stretch(volume, face, self.stretch_increment)?])
            }
            ActionMode::Duplicate => EditPlan {
                add: vec![geometry::duplicate(volume, face)?],
                ..Default::default()
            },
        };
        Ok(plan)
    }

    /// Plan and commit an edit on `target`. On any error the registry is
    /// left exactly as it was.
    pub fn apply(
        &self,
        mode: ActionMode,
        target: PickTarget,
        registry: &mut VolumeRegistry,
    ) -> Result<EditOutcome, EditError> {
        let volume = registry.lookup(target.id)?;
        let plan = self.plan(mode, volume, target.face)?;

        if self.protect_last_editable && mode == ActionMode::Delete && !volume.fixed
            && registry.editable_count() <= 1
        {
            return Err(EditError::LastEditableVolume(target.id));
        }

        let removed = plan.remove.clone();
        let added = registry.commit(&plan.remove, plan.add)?;
        debug!("{mode} on {}: -{} +{}", target.id, removed.len(), added.len());

        Ok(EditOutcome {
            mode,
            target: target.id,
            removed,
            added,
            selected: plan.select,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::volume::{FaceColors, Rgb};

    fn face(i: u8) -> Face {
        Face::new(i).unwrap()
    }

    fn scene() -> (VolumeRegistry, VolumeId, VolumeId) {
        let mut registry = VolumeRegistry::new();
        let ground = registry.insert(
            Volume::cube(Vec3::new(0.0, -1.0, 0.0), FaceColors::uniform(Rgb::SOIL)).with_fixed(true),
        );
        let cube = registry.insert(Volume::cube(Vec3::ZERO, FaceColors::uniform(Rgb::PLUM)));
        (registry, ground, cube)
    }

    fn target(id: VolumeId, f: u8) -> PickTarget {
        PickTarget { id, face: face(f) }
    }

    #[test]
    fn test_slice_x_scenario() {
        let (mut registry, _, cube) = scene();
        let outcome = EditEngine::default()
            .apply(ActionMode::SliceX, target(cube, 0), &mut registry)
            .unwrap();
        assert_eq!(outcome.removed, vec![cube]);
        assert_eq!(outcome.added.len(), 2);
        assert!(!registry.contains(cube));

        let mut centers: Vec<f32> = outcome
            .added
            .iter()
            .map(|id| {
                let v = registry.get(*id).unwrap();
                assert_eq!(v.extent(), Vec3::new(0.5, 1.0, 1.0));
                assert_eq!(v.center().y, 0.0);
                assert_eq!(v.center().z, 0.0);
                v.center().x
            })
            .collect();
        centers.sort_by(f32::total_cmp);
        assert_eq!(centers, vec![-0.25, 0.25]);
    }

    #[test]
    fn test_duplicate_scenario() {
        let (mut registry, _, cube) = scene();
        registry.get_mut(cube).unwrap().colors.set_overlay(2, Rgb::FOREST_GREEN);

        let outcome = EditEngine::default()
            .apply(ActionMode::Duplicate, target(cube, 2), &mut registry)
            .unwrap();
        assert!(outcome.removed.is_empty());
        let copy = registry.get(outcome.added[0]).unwrap();
        assert_eq!(copy.center(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(copy.extent(), Vec3::ONE);
        assert_eq!(copy.colors.effective(2), Rgb::PLUM);

        let original = registry.get(cube).unwrap();
        assert_eq!(original.center(), Vec3::ZERO);
    }

    #[test]
    fn test_subdivide_and_stretch_replace_source() {
        let (mut registry, _, cube) = scene();
        let engine = EditEngine::default();
        let outcome = engine.apply(ActionMode::Subdivide, target(cube, 0), &mut registry).unwrap();
        assert_eq!(outcome.added.len(), 8);
        assert_eq!(registry.len(), 9);

        let octant = outcome.added[0];
        let outcome = engine.apply(ActionMode::Stretch, target(octant, 3), &mut registry).unwrap();
        let stretched = registry.get(outcome.added[0]).unwrap();
        assert_eq!(stretched.extent().y, 1.5);
        assert!(!registry.contains(octant));
    }

    #[test]
    fn test_select_changes_no_geometry() {
        let (mut registry, ground, _) = scene();
        let outcome = EditEngine::default()
            .apply(ActionMode::Select, target(ground, 2), &mut registry)
            .unwrap();
        assert_eq!(outcome.selected, Some(ground));
        assert!(!outcome.invalidates_pick());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_fixed_volume_guard() {
        let (mut registry, ground, _) = scene();
        let engine = EditEngine::default();
        for mode in ActionMode::ALL.into_iter().filter(|m| !m.allowed_on_fixed()) {
            let err = engine.apply(mode, target(ground, 2), &mut registry).unwrap_err();
            assert_eq!(err, EditError::FixedVolume(ground));
        }
        assert_eq!(registry.len(), 2);

        let outcome = engine.apply(ActionMode::Duplicate, target(ground, 2), &mut registry).unwrap();
        assert_eq!(registry.get(outcome.added[0]).unwrap().center(), Vec3::ZERO);
    }

    #[test]
    fn test_dangling_target() {
        let (mut registry, _, cube) = scene();
        registry.remove(cube);
        let err = EditEngine::default()
            .apply(ActionMode::Delete, target(cube, 0), &mut registry)
            .unwrap_err();
        assert_eq!(err, EditError::DanglingReference(cube));
    }

    #[test]
    fn test_last_editable_policy() {
        let (mut registry, _, cube) = scene();
        let strict = EditEngine::new(1.0, true);
        let err = strict.apply(ActionMode::Delete, target(cube, 0), &mut registry).unwrap_err();
        assert_eq!(err, EditError::LastEditableVolume(cube));
        assert!(registry.contains(cube));

        EditEngine::default().apply(ActionMode::Delete, target(cube, 0), &mut registry).unwrap();
        assert_eq!(registry.editable_count(), 0);
    }

    #[test]
    fn test_degenerate_stretch_refused() {
        let (mut registry, _, cube) = scene();
        let engine = EditEngine::new(-1.0, false);
        let err = engine.apply(ActionMode::Stretch, target(cube, 0), &mut registry).unwrap_err();
        assert!(matches!(err, EditError::DegenerateGeometry { .. }));
        assert!(registry.contains(cube));
    }
}

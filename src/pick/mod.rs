//! Pick resolution: pointer ray to the nearest volume and face.
//!
//! Results are ephemeral. Anything that changes registry membership
//! invalidates them, and callers re-resolve rather than patch.

use log::warn;

use crate::math::Ray;
use crate::render::Intersector;
use crate::volume::{Face, VolumeId, VolumeRegistry};

/// A volume and the face of it under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PickTarget {
    pub id: VolumeId,
    pub face: Face,
}

/// Outcome of a pick; `target` is `None` when the ray hits nothing pickable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PickResult {
    pub target: Option<PickTarget>,
}

impl PickResult {
    pub const NONE: PickResult = PickResult { target: None };

    pub fn hit(id: VolumeId, face: Face) -> Self {
        Self { target: Some(PickTarget { id, face }) }
    }

    pub fn volume_id(&self) -> Option<VolumeId> {
        self.target.map(|t| t.id)
    }

    pub fn face(&self) -> Option<Face> {
        self.target.map(|t| t.face)
    }

    pub fn is_none(&self) -> bool {
        self.target.is_none()
    }
}

/// Resolve `ray` to the nearest pickable volume.
///
/// Equal distances go to the earlier-registered volume. Hits that name a
/// volume the registry no longer holds, or carry an impossible face index,
/// are ignored.
pub fn resolve(ray: &Ray, registry: &VolumeRegistry, intersector: &impl Intersector) -> PickResult {
    let mut best: Option<(f32, PickTarget)> = None;

    for hit in intersector.intersect(ray, registry) {
        if !registry.contains(hit.id) {
            continue;
        }
        let face = match Face::new(hit.face) {
            Ok(face) => face,
            Err(e) => {
                warn!("ignoring hit on {}: {e}", hit.id);
                continue;
            }
        };
        let closer = match best {
            None => true,
            Some((distance, target)) => {
                hit.distance < distance || (hit.distance == distance && hit.id < target.id)
            }
        };
        if closer {
            best = Some((hit.distance, PickTarget { id: hit.id, face }));
        }
    }

    PickResult { target: best.map(|(_, target)| target) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::render::{RayHit, SlabIntersector};
    use crate::volume::{FaceColors, Rgb, Volume};

    fn cube(center: Vec3) -> Volume {
        Volume::cube(center, FaceColors::uniform(Rgb::PLUM))
    }

    /// Replays a fixed hit list regardless of the ray
    struct Canned(Vec<RayHit>);

    impl Intersector for Canned {
        fn intersect(&self, _ray: &Ray, _registry: &VolumeRegistry) -> Vec<RayHit> {
            self.0.clone()
        }
    }

    fn down_ray() -> Ray {
        Ray::new(Vec3::new(0.1, 10.0, 0.2), -Vec3::Y)
    }

    #[test]
    fn test_nearest_volume_and_face() {
        let mut registry = VolumeRegistry::new();
        let ground = registry.insert(cube(Vec3::new(0.0, -1.0, 0.0)).with_fixed(true));
        let top = registry.insert(cube(Vec3::ZERO));

        let pick = resolve(&down_ray(), &registry, &SlabIntersector);
        assert_eq!(pick, PickResult::hit(top, Face::new(2).unwrap()));

        registry.remove(top);
        let pick = resolve(&down_ray(), &registry, &SlabIntersector);
        assert_eq!(pick.volume_id(), Some(ground));
    }

    #[test]
    fn test_miss_is_none() {
        let mut registry = VolumeRegistry::new();
        registry.insert(cube(Vec3::new(50.0, 0.0, 0.0)));
        let pick = resolve(&down_ray(), &registry, &SlabIntersector);
        assert!(pick.is_none());
        assert_eq!(pick.volume_id(), None);
        assert_eq!(pick.face(), None);
    }

    #[test]
    fn test_ray_down_a_seam_hits_first_registered() {
        let mut registry = VolumeRegistry::new();
        let left = registry.insert(cube(Vec3::ZERO));
        registry.insert(cube(Vec3::X));
        let ray = Ray::new(Vec3::new(0.5, 10.0, 0.0), -Vec3::Y);
        let pick = resolve(&ray, &registry, &SlabIntersector);
        assert_eq!(pick, PickResult::hit(left, Face::new(2).unwrap()));
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let mut registry = VolumeRegistry::new();
        let a = registry.insert(cube(Vec3::ZERO));
        let b = registry.insert(cube(Vec3::ZERO));
        let canned = Canned(vec![
            RayHit { id: b, face: 1, distance: 2.0 },
            RayHit { id: a, face: 0, distance: 2.0 },
        ]);
        let pick = resolve(&down_ray(), &registry, &canned);
        assert_eq!(pick, PickResult::hit(a, Face::new(0).unwrap()));
    }

    #[test]
    fn test_stale_and_malformed_hits_skipped() {
        let mut registry = VolumeRegistry::new();
        let live = registry.insert(cube(Vec3::ZERO));
        let canned = Canned(vec![
            RayHit { id: VolumeId(404), face: 0, distance: 0.5 },
            RayHit { id: live, face: 9, distance: 1.0 },
            RayHit { id: live, face: 3, distance: 3.0 },
        ]);
        let pick = resolve(&down_ray(), &registry, &canned);
        assert_eq!(pick, PickResult::hit(live, Face::new(3).unwrap()));
    }
}

//! CPU ray casting against the registry's boxes.

use crate::math::Ray;
use crate::volume::VolumeRegistry;

use super::{Intersector, RayHit};

/// Brute-force slab test against every pickable volume.
#[derive(Clone, Copy, Debug, Default)]
pub struct SlabIntersector;

impl Intersector for SlabIntersector {
    fn intersect(&self, ray: &Ray, registry: &VolumeRegistry) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = registry
            .pickable()
            .filter_map(|volume| {
                ray.intersect_face(&volume.aabb()).map(|hit| RayHit {
                    id: volume.id,
                    face: hit.face,
                    distance: hit.distance,
                })
            })
            .collect();
        // Stable sort keeps registration order among equal distances
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

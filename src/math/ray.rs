//! Ray type and operations

use crate::core::types::Vec3;
use super::aabb::Aabb;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: Vec3,
}

/// Where a ray strikes a box: distance along the ray and the face index
/// (0/1 = +x/-x, 2/3 = +y/-y, 4/5 = +z/-z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceHit {
    pub distance: f32,
    pub face: u8,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// Slab intersection that also reports which face was struck.
    ///
    /// The entry face is reported when the origin is outside the box; a ray
    /// starting inside reports the face it leaves through.
    pub fn intersect_face(&self, aabb: &Aabb) -> Option<FaceHit> {
        let (t_min, t_max) = self.slabs(aabb);

        let t_near = t_min.max_element();
        let t_far = t_max.min_element();
        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        if t_near >= 0.0 {
            let axis = arg_max(t_min);
            // Travelling towards -axis means we come in through the + face.
            let negative = self.direction[axis] < 0.0;
            Some(FaceHit {
                distance: t_near,
                face: axis as u8 * 2 + if negative { 0 } else { 1 },
            })
        } else {
            let axis = arg_min(t_max);
            let negative = self.direction[axis] < 0.0;
            Some(FaceHit {
                distance: t_far,
                face: axis as u8 * 2 + if negative { 1 } else { 0 },
            })
        }
    }

    /// Per-axis entry and exit parameters. An axis the ray runs parallel to
    /// spans all of t when the origin lies within the slab (boundary
    /// included) and none of it otherwise.
    fn slabs(&self, aabb: &Aabb) -> (Vec3, Vec3) {
        let mut t_min = Vec3::ZERO;
        let mut t_max = Vec3::ZERO;
        for i in 0..3 {
            if self.direction[i] == 0.0 {
                let inside = aabb.min[i] <= self.origin[i] && self.origin[i] <= aabb.max[i];
                let (lo, hi) = if inside {
                    (f32::NEG_INFINITY, f32::INFINITY)
                } else {
                    (f32::INFINITY, f32::NEG_INFINITY)
                };
                t_min[i] = lo;
                t_max[i] = hi;
            } else {
                let t1 = (aabb.min[i] - self.origin[i]) * self.inv_direction[i];
                let t2 = (aabb.max[i] - self.origin[i]) * self.inv_direction[i];
                t_min[i] = t1.min(t2);
                t_max[i] = t1.max(t2);
            }
        }
        (t_min, t_max)
    }
}

fn arg_max(v: Vec3) -> usize {
    if v.x >= v.y && v.x >= v.z {
        0
    } else if v.y >= v.z {
        1
    } else {
        2
    }
}

fn arg_min(v: Vec3) -> usize {
    if v.x <= v.y && v.x <= v.z {
        0
    } else if v.y <= v.z {
        1
    } else {
        2
    }
}

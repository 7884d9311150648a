//! The editable unit: an axis-aligned box with per-face colours.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Aabb;
use super::color::FaceColors;
use super::error::EditError;
use super::face::Axis;

/// Unique identifier for a registered volume.
///
/// `VolumeId::PENDING` marks a volume that has been built but not yet
/// registered; the registry assigns the real id on insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VolumeId(pub u64);

impl VolumeId {
    pub const PENDING: VolumeId = VolumeId(0);

    pub fn is_pending(self) -> bool {
        self == Self::PENDING
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A positioned box. Geometry is never mutated in place; edits build new
/// volumes. Only `colors` may change after registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: VolumeId,
    center: Vec3,
    extent: Vec3,
    pub colors: FaceColors,
    /// Ground/platform volumes: pickable but exempt from destructive edits.
    pub fixed: bool,
}

impl Volume {
    /// Build an unregistered volume. Every extent must be finite and positive.
    pub fn new(center: Vec3, extent: Vec3, colors: FaceColors) -> Result<Self, EditError> {
        if !is_valid_extent(extent) || !center.is_finite() {
            return Err(EditError::DegenerateGeometry { extent });
        }
        Ok(Self {
            id: VolumeId::PENDING,
            center,
            extent,
            colors,
            fixed: false,
        })
    }

    /// Unit cube at `center`
    pub fn cube(center: Vec3, colors: FaceColors) -> Self {
        Self {
            id: VolumeId::PENDING,
            center,
            extent: Vec3::ONE,
            colors,
            fixed: false,
        }
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// (width, height, depth)
    pub fn extent(&self) -> Vec3 {
        self.extent
    }

    pub fn extent_along(&self, axis: Axis) -> f32 {
        self.extent[axis.index()]
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_extent(self.center, self.extent)
    }

    /// Width × height × depth
    pub fn measure(&self) -> f32 {
        self.extent.x * self.extent.y * self.extent.z
    }

    /// Derive an unregistered volume with new geometry, keeping the persisted
    /// colours and the fixed flag.
    pub(crate) fn reshaped(&self, center: Vec3, extent: Vec3) -> Result<Self, EditError> {
        Volume::new(center, extent, self.colors.persisted()).map(|v| v.with_fixed(self.fixed))
    }
}

pub(crate) fn is_valid_extent(extent: Vec3) -> bool {
    extent.is_finite() && extent.cmpgt(Vec3::ZERO).all()
}

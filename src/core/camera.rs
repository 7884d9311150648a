//! Orbit camera used to turn pointer positions into pick rays

use crate::core::types::{Mat4, Vec2, Vec3};
use crate::math::Ray;

/// Perspective camera orbiting a target point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickCamera {
    /// Point the camera looks at
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Rotation around Y in radians
    yaw: f32,
    /// Elevation in radians, kept short of the poles
    pitch: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Radians of orbit per pixel of drag
const ORBIT_SENSITIVITY: f32 = 0.01;

impl PickCamera {
    /// Create a new camera
    pub fn new(target: Vec3, distance: f32, yaw: f32, pitch: f32, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            target,
            distance,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// World position
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Get projection matrix (camera to clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get inverse view-projection matrix (for ray generation)
    pub fn view_projection_inverse(&self) -> Mat4 {
        (self.projection_matrix() * self.view_matrix()).inverse()
    }

    /// World-space ray through a point in normalized device coordinates
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection_inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray::new(near, (far - near).normalize())
    }

    /// Orbit by a pointer drag in pixels
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Update aspect ratio (call on window resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }
}

impl Default for PickCamera {
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            10.0,
            std::f32::consts::FRAC_PI_4,
            std::f32::consts::FRAC_PI_6,
            75.0,
            16.0 / 9.0,
        )
    }
}

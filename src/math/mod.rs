//! Mathematical utilities

pub mod aabb;
pub mod ray;

pub use aabb::Aabb;
pub use ray::{FaceHit, Ray};

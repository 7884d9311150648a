//! Volumes and the geometry edits that derive new ones.

pub mod color;
pub mod error;
pub mod face;
pub mod geometry;
pub mod ground;
pub mod registry;
pub mod volume;

pub use color::{FaceColors, Rgb};
pub use error::EditError;
pub use face::{face_params, Axis, Dimension, Face, FaceParams, Sign};
pub use ground::GroundConfig;
pub use registry::VolumeRegistry;
pub use volume::{Volume, VolumeId};

//! Errors raised by geometry edits and registry lookups

use glam::Vec3;
use thiserror::Error;

use super::VolumeId;

/// Why an edit was refused. None of these leave the registry modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("face index {0} is outside 0..6")]
    InvalidFace(u8),

    #[error("volume {0} is no longer registered")]
    DanglingReference(VolumeId),

    #[error("edit would produce a degenerate extent {extent:?}")]
    DegenerateGeometry { extent: Vec3 },

    #[error("volume {0} is fixed and only accepts select or duplicate")]
    FixedVolume(VolumeId),

    #[error("volume {0} is the last editable volume")]
    LastEditableVolume(VolumeId),
}

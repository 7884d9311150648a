//! Face-index arithmetic.
//!
//! Faces 0,1 lie on the x axis, 2,3 on y, 4,5 on z. Even indices face the
//! positive direction, odd ones the negative.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::EditError;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into a `Vec3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Get unit vector for this axis
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Extent measured along this axis
    pub fn dimension(self) -> Dimension {
        match self {
            Axis::X => Dimension::Width,
            Axis::Y => Dimension::Height,
            Axis::Z => Dimension::Depth,
        }
    }
}

/// Named box extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Width,
    Height,
    Depth,
}

impl Dimension {
    pub fn axis(self) -> Axis {
        match self {
            Dimension::Width => Axis::X,
            Dimension::Height => Axis::Y,
            Dimension::Depth => Axis::Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Depth => "depth",
        }
    }
}

/// Direction along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// A validated face index in `0..6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const COUNT: usize = 6;

    pub fn new(index: u8) -> Result<Self, EditError> {
        if (index as usize) < Self::COUNT {
            Ok(Face(index))
        } else {
            Err(EditError::InvalidFace(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn params(self) -> FaceParams {
        let axis = Axis::ALL[self.index() / 2];
        let sign = if self.0 % 2 == 0 { Sign::Positive } else { Sign::Negative };
        FaceParams {
            dimension: axis.dimension(),
            axis,
            sign,
        }
    }

    /// Face on the other side of the box
    pub fn opposite(self) -> Face {
        Face(self.0 ^ 1)
    }

    pub fn all() -> impl Iterator<Item = Face> {
        (0..Self::COUNT as u8).map(Face)
    }
}

impl TryFrom<u8> for Face {
    type Error = EditError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Face::new(index)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

/// What a face index means geometrically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceParams {
    pub dimension: Dimension,
    pub axis: Axis,
    pub sign: Sign,
}

impl FaceParams {
    /// Unit outward normal of the face
    pub fn normal(&self) -> Vec3 {
        self.axis.to_vec3() * self.sign.as_f32()
    }
}

/// Map a raw face index to its (dimension, axis, sign) triple.
pub fn face_params(face: u8) -> Result<FaceParams, EditError> {
    Face::new(face).map(Face::params)
}

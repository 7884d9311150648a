//! Initial scene population: a flat grid of fixed ground cubes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::color::{FaceColors, Rgb};
use super::volume::Volume;

/// Ground grid settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Whether the editor starts with a ground grid
    pub enabled: bool,
    /// Cubes per side
    pub size: u32,
    /// Y coordinate of the cube centres
    pub level: f32,
}

impl GroundConfig {
    /// Largest accepted grid side
    pub const MAX_SIZE: u32 = 1024;
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 32,
            level: -1.0,
        }
    }
}

/// Face colours for ground cubes, green on top.
pub fn ground_palette() -> [Rgb; 6] {
    [
        Rgb::SOIL,
        Rgb::SADDLE_BROWN,
        Rgb::DARK_GREEN,
        Rgb::PLUM,
        Rgb::SADDLE_BROWN,
        Rgb::SOIL,
    ]
}

/// Face colours for freshly created editable cubes
pub fn default_palette() -> [Rgb; 6] {
    [
        Rgb::PLUM,
        Rgb::PALE_VIOLET_RED,
        Rgb::PAPAYA_WHIP,
        Rgb::LIGHT_GREEN,
        Rgb::LIGHT_BLUE,
        Rgb::SLATE_BLUE,
    ]
}

/// `size × size` fixed unit cubes centred on the origin in x/z.
pub fn create_ground(config: &GroundConfig, palette: [Rgb; 6]) -> Vec<Volume> {
    let half = (config.size / 2) as f32;
    let side = config.size as usize;
    let mut cubes = Vec::with_capacity(side.checked_mul(side).unwrap_or(0));
    for i in 0..config.size {
        for j in 0..config.size {
            let center = Vec3::new(i as f32 - half, config.level, j as f32 - half);
            cubes.push(Volume::cube(center, FaceColors::new(palette)).with_fixed(true));
        }
    }
    cubes
}

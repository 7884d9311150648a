//! Face colours with a persisted base and a transient overlay.

use serde::{Deserialize, Serialize};

/// Linear RGB colour, each channel in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const PLUM: Rgb = Rgb::from_hex(0xdda0dd);
    pub const PALE_VIOLET_RED: Rgb = Rgb::from_hex(0xdb7093);
    pub const PAPAYA_WHIP: Rgb = Rgb::from_hex(0xffefd5);
    pub const LIGHT_GREEN: Rgb = Rgb::from_hex(0x90ee90);
    pub const LIGHT_BLUE: Rgb = Rgb::from_hex(0xadd8e6);
    pub const SLATE_BLUE: Rgb = Rgb::from_hex(0x6a5acd);
    pub const SADDLE_BROWN: Rgb = Rgb::from_hex(0x8b4513);
    pub const DARK_GREEN: Rgb = Rgb::from_hex(0x006400);
    pub const SOIL: Rgb = Rgb::from_hex(0x1b0000);
    pub const FOREST_GREEN: Rgb = Rgb::from_hex(0x228b22);
    pub const CYAN_OUTLINE: Rgb = Rgb::from_hex(0x55ffff);

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb([
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ])
    }

    /// Parse a six-digit hex string, with or without a leading `#`.
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Rgb::from_hex)
    }

    /// Pack back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }
}

/// Six per-face colours. `base` is what the user painted; `overlay` is a
/// transient tint (hover highlight) drawn on top and never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceColors {
    base: [Rgb; 6],
    #[serde(skip)]
    overlay: [Option<Rgb>; 6],
}

impl FaceColors {
    pub fn new(base: [Rgb; 6]) -> Self {
        Self { base, overlay: [None; 6] }
    }

    /// Same colour on every face.
    pub fn uniform(color: Rgb) -> Self {
        Self::new([color; 6])
    }

    /// Persisted colour of a face.
    pub fn base(&self, face: usize) -> Rgb {
        self.base[face]
    }

    pub fn bases(&self) -> &[Rgb; 6] {
        &self.base
    }

    /// Colour a renderer should draw for a face.
    pub fn effective(&self, face: usize) -> Rgb {
        self.overlay[face].unwrap_or(self.base[face])
    }

    pub fn set_base(&mut self, face: usize, color: Rgb) {
        self.base[face] = color;
    }

    pub fn set_overlay(&mut self, face: usize, color: Rgb) {
        self.overlay[face] = Some(color);
    }

    pub fn clear_overlay(&mut self, face: usize) {
        self.overlay[face] = None;
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.iter().any(Option::is_some)
    }

    /// Copy of the persisted colours only, with no overlay carried along.
    pub fn persisted(&self) -> Self {
        Self::new(self.base)
    }
}

use serde::{Deserialize, Serialize};

use crate::scene::Material;

/// Convert a packed `0xRRGGBB` color into normalized RGB.
#[must_use]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Color palette for the scene backdrop, ground, and block materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Clear color behind the scene.
    pub background: [f32; 3],
    /// Ground plane color.
    pub ground: [f32; 3],
    /// Center lines of the helper grid.
    pub grid_center_line: [f32; 3],
    /// Remaining helper grid lines.
    pub grid_line: [f32; 3],
    /// Grass block color.
    pub grass: [f32; 3],
    /// Dirt block color.
    pub dirt: [f32; 3],
    /// Stone block color.
    pub stone: [f32; 3],
    /// Wood block color.
    pub wood: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            background: hex_to_rgb(0x00bf_d1e5),
            ground: hex_to_rgb(0x004f_8f3a),
            grid_center_line: hex_to_rgb(0x0044_4444),
            grid_line: hex_to_rgb(0x0088_8888),
            grass: hex_to_rgb(0x0055_aa55),
            dirt: hex_to_rgb(0x008b_5a2b),
            stone: hex_to_rgb(0x0088_8888),
            wood: hex_to_rgb(0x008f_6a3a),
        }
    }
}

impl ColorOptions {
    /// Look up the block color for a material.
    #[must_use]
    pub fn material(&self, material: Material) -> [f32; 3] {
        match material {
            Material::Grass => self.grass,
            Material::Dirt => self.dirt,
            Material::Stone => self.stone,
            Material::Wood => self.wood,
        }
    }
}

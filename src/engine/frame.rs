//! Per-frame render snapshot

use super::BuilderEngine;
use crate::camera::CameraUniform;
use crate::options::LightingOptions;
use crate::scene::{BlockInstance, GroundPlane};

/// Everything a renderer needs to draw one frame: camera uniform, ground,
/// helper grid, lighting, and one instance per placed block.
///
/// Blocks are ordered by placement, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// View-projection uniform for the current orbit.
    pub camera: CameraUniform,
    /// Clear color.
    pub background: [f32; 3],
    /// Ground plane geometry.
    pub ground: GroundPlane,
    /// Ground fill color.
    pub ground_color: [f32; 3],
    /// Helper grid line count across the ground.
    pub grid_divisions: u32,
    /// Color of the two grid lines through the origin.
    pub grid_center_line: [f32; 3],
    /// Color of the remaining grid lines.
    pub grid_line: [f32; 3],
    /// Ambient and sun parameters.
    pub lighting: LightingOptions,
    /// Instance data for every placed block.
    pub blocks: Vec<BlockInstance>,
}

impl BuilderEngine {
    /// Snapshot the scene for rendering.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let colors = &self.options.colors;
        let mut placed: Vec<_> = self.grid.iter().collect();
        placed.sort_unstable_by_key(|block| block.id);

        Frame {
            camera: self.camera_controller.uniform(),
            background: colors.background,
            ground: self.ground,
            ground_color: colors.ground,
            grid_divisions: self.options.grid.grid_divisions,
            grid_center_line: colors.grid_center_line,
            grid_line: colors.grid_line,
            lighting: self.options.lighting.clone(),
            blocks: placed
                .into_iter()
                .map(|block| BlockInstance::new(block, colors))
                .collect(),
        }
    }
}

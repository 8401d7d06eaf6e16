use crate::options::ColorOptions;
use crate::scene::PlacedBlock;

/// Per-block draw data, laid out for direct upload as an instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlockInstance {
    /// World-space center.
    pub position: [f32; 3],
    /// Edge length.
    pub size: f32,
    /// Linear RGB color of the block's material.
    pub color: [f32; 3],
    /// Padding for 16-byte alignment.
    pub(crate) _pad: f32,
}

impl BlockInstance {
    /// Build the instance for a placed block using the palette in `colors`.
    pub fn new(block: &PlacedBlock, colors: &ColorOptions) -> Self {
        Self {
            position: block.position.to_array(),
            size: block.size,
            color: colors.material(block.material),
            _pad: 0.0,
        }
    }
}

//! Scene contents: the ground plane, the placement grid, and the block
//! instances handed to the renderer.

mod ground;
pub mod grid;
mod instance;
mod material;

pub use ground::GroundPlane;
pub use grid::{BlockId, CellKey, PlacedBlock, PlacementGrid};
pub use instance::BlockInstance;
pub use material::Material;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
/// Placement lattice and ground plane parameters.
pub struct GridOptions {
    /// Edge length of one lattice cell (and of every placed block).
    #[schemars(skip)]
    pub cell_size: f32,
    /// Edge length of the square ground plane centered at the origin.
    #[schemars(title = "Ground Size", range(min = 8.0, max = 128.0), extend("step" = 2.0))]
    pub ground_size: f32,
    /// Height of the ground plane. Sits slightly below zero so blocks
    /// resting at y = 0 never z-fight with it.
    #[schemars(skip)]
    pub ground_height: f32,
    /// Number of helper grid lines drawn across the ground.
    #[schemars(title = "Grid Divisions", range(min = 1, max = 128))]
    pub grid_divisions: u32,
    /// Allow blocks to stack vertically on top faces.
    #[schemars(title = "Stacking")]
    pub stacking: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            ground_size: 32.0,
            ground_height: -0.01,
            grid_divisions: 32,
            stacking: false,
        }
    }
}

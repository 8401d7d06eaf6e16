use std::fmt;

use serde::{Deserialize, Serialize};

/// Block material. Fixed when a block is placed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// Green top-soil block.
    #[default]
    Grass,
    /// Brown soil block.
    Dirt,
    /// Gray rock block.
    Stone,
    /// Timber block.
    Wood,
}

impl Material {
    /// Every material, in selector order.
    pub const ALL: [Self; 4] = [Self::Grass, Self::Dirt, Self::Stone, Self::Wood];

    /// Lowercase display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Wood => "wood",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

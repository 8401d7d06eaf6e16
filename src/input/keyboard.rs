use serde::{Deserialize, Serialize};

use crate::camera::CameraStep;
use crate::engine::BuilderCommand;
use crate::scene::Material;

/// Builder actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// rotate_left = "ArrowLeft"
/// select_wood = "Digit4"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Orbit one step counter-clockwise.
    RotateLeft,
    /// Orbit one step clockwise.
    RotateRight,
    /// Raise the camera toward the pole.
    TiltUp,
    /// Lower the camera toward the horizon.
    TiltDown,
    /// Move the camera closer.
    ZoomIn,
    /// Move the camera away.
    ZoomOut,
    /// Make grass the active material.
    SelectGrass,
    /// Make dirt the active material.
    SelectDirt,
    /// Make stone the active material.
    SelectStone,
    /// Make wood the active material.
    SelectWood,
}

impl KeyAction {
    /// Convert to the corresponding parameterless [`BuilderCommand`].
    #[must_use]
    pub fn to_command(self) -> BuilderCommand {
        match self {
            Self::RotateLeft => BuilderCommand::StepCamera(CameraStep::RotateLeft),
            Self::RotateRight => {
                BuilderCommand::StepCamera(CameraStep::RotateRight)
            }
            Self::TiltUp => BuilderCommand::StepCamera(CameraStep::TiltUp),
            Self::TiltDown => BuilderCommand::StepCamera(CameraStep::TiltDown),
            Self::ZoomIn => BuilderCommand::StepCamera(CameraStep::ZoomIn),
            Self::ZoomOut => BuilderCommand::StepCamera(CameraStep::ZoomOut),
            Self::SelectGrass => BuilderCommand::SelectMaterial(Material::Grass),
            Self::SelectDirt => BuilderCommand::SelectMaterial(Material::Dirt),
            Self::SelectStone => BuilderCommand::SelectMaterial(Material::Stone),
            Self::SelectWood => BuilderCommand::SelectMaterial(Material::Wood),
        }
    }
}

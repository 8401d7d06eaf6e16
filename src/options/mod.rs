//! Centralized builder options with TOML preset support.
//!
//! All tweakable settings (camera limits and sensitivities, grid geometry,
//! colors, lighting, keybindings) are consolidated here. Options serialize
//! to/from TOML so a scene setup can be stored as a named preset.

mod camera;
mod colors;
mod grid;
mod keybindings;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::{hex_to_rgb, ColorOptions};
pub use grid::GridOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BuilderError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, orbit limits, and control parameters.
    pub camera: CameraOptions,
    /// Placement lattice and ground parameters.
    pub grid: GridOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, BuilderError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| BuilderError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BuilderError> {
        let content = std::fs::read_to_string(path).map_err(BuilderError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BuilderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BuilderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BuilderError::Io)?;
        }
        std::fs::write(path, content).map_err(BuilderError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

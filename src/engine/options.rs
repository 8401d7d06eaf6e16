//! Options methods for BuilderEngine

use std::path::Path;

use super::BuilderEngine;
use crate::options::Options;
use crate::scene::GroundPlane;

impl BuilderEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the last preset loaded or saved, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the camera, the grid, and the input
    /// processor. Colors and lighting are read per frame.
    pub fn apply_options(&mut self) {
        self.camera_controller.apply_options(&self.options.camera);
        self.apply_grid();
        self.input
            .set_key_bindings(self.options.keybindings.clone());
    }

    /// Push grid options to the placement grid and the ground plane.
    fn apply_grid(&mut self) {
        let go = &self.options.grid;
        self.ground = GroundPlane::from(go);
        if !self.grid.reconfigure(go.cell_size, go.stacking) {
            log::warn!(
                "grid has {} blocks; keeping cell size {} and stacking={}",
                self.grid.len(),
                self.grid.cell_size(),
                self.grid.stacking()
            );
        }
    }

    /// Load a named options preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded options preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load options preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved options preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save options preset '{name}': {e}");
                false
            }
        }
    }
}

//! The block builder engine: lifecycle, command dispatch, options, and
//! per-frame snapshots.

mod command;
mod frame;
mod host;
mod input;
mod options;
#[cfg(test)]
pub(crate) mod testing;

pub use command::{BuilderCommand, InputResponse};
pub use frame::Frame;
pub use host::{Host, ListenerId};

use crate::camera::CameraController;
use crate::error::BuilderError;
use crate::input::InputProcessor;
use crate::options::Options;
use crate::picking::Viewport;
use crate::scene::{GroundPlane, Material, PlacementGrid};

/// The block builder: a single owning context for the orbit camera, the
/// placement grid, and the input state.
///
/// Every handler takes `&mut self`, so all mutation happens on the thread
/// that owns the engine, in event order.
///
/// # Lifecycle
///
/// Create with [`mount`](Self::mount), destroy with
/// [`teardown`](Self::teardown). Mounting registers a resize listener
/// with the [`Host`]; teardown consumes the engine so the listener and the
/// render surface are released exactly once.
///
/// # Frame loop
///
/// Each animation frame, call [`frame`](Self::frame) and hand the
/// resulting [`Frame`] to the renderer. Input is forwarded via
/// [`handle_input`](Self::handle_input) and
/// [`handle_key_press`](Self::handle_key_press), or as commands through
/// [`execute`](Self::execute).
pub struct BuilderEngine {
    /// Orbital camera controller.
    pub camera_controller: CameraController,
    /// Placed blocks.
    grid: PlacementGrid,
    /// Click target beneath the blocks.
    ground: GroundPlane,
    /// Client rectangle of the render surface.
    viewport: Viewport,
    /// Material used by the next placement.
    material: Material,
    /// Modifier state and key bindings.
    input: InputProcessor,
    /// Runtime camera, grid, color, lighting, and keybinding options.
    options: Options,
    /// Currently applied options preset name, if any.
    active_preset: Option<String>,
    /// Listeners registered with the host at mount.
    listeners: Vec<ListenerId>,
}

impl BuilderEngine {
    /// Build the scene inside the host's mount target.
    ///
    /// Returns `Ok(None)` without touching the host when there is no mount
    /// target. Listeners are only registered once the render surface has
    /// been acquired.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Surface`] if the host cannot provide a
    /// render surface.
    pub fn mount(
        host: &mut impl Host,
        options: Options,
    ) -> Result<Option<Self>, BuilderError> {
        let Some(viewport) = host.mount_viewport() else {
            log::debug!("no mount target; skipping scene setup");
            return Ok(None);
        };
        host.acquire_surface(&viewport)?;
        let resize_listener = host.add_resize_listener();

        let aspect = viewport.aspect().unwrap_or(1.0);
        let camera_controller = CameraController::new(&options.camera, aspect);
        let orbit = camera_controller.orbit();
        log::info!(
            "mounted {}x{} builder, orbit r={:.2} polar={:.3} azimuth={:.3}",
            viewport.width,
            viewport.height,
            orbit.radius,
            orbit.polar,
            orbit.azimuth
        );

        Ok(Some(Self {
            camera_controller,
            grid: PlacementGrid::from(&options.grid),
            ground: GroundPlane::from(&options.grid),
            viewport,
            material: Material::default(),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            options,
            active_preset: None,
            listeners: vec![resize_listener],
        }))
    }

    /// Unregister every listener added at mount and release the render
    /// surface.
    pub fn teardown(self, host: &mut impl Host) {
        for listener in self.listeners {
            host.remove_listener(listener);
        }
        host.release_surface();
        log::info!("builder torn down with {} blocks", self.grid.len());
    }

    /// Placed blocks.
    #[must_use]
    pub fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    /// Ground plane.
    #[must_use]
    pub fn ground(&self) -> &GroundPlane {
        &self.ground
    }

    /// Client rectangle of the render surface.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Material used by the next placement.
    #[must_use]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Read-only access to the input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Move the render surface within the client area without resizing
    /// it (e.g. after a layout scroll).
    pub fn set_viewport_origin(&mut self, left: f32, top: f32) {
        self.viewport.left = left;
        self.viewport.top = top;
    }
}

//! The builder's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a pointer gesture,
//! a key press, a toolbar button, or a programmatic call, is represented
//! as a `BuilderCommand`. Consumers construct commands and pass them to
//! [`BuilderEngine::execute`](super::BuilderEngine::execute).

use crate::camera::CameraStep;
use crate::scene::{BlockId, Material};

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(BuilderCommand::SelectMaterial(Material::Stone));
/// engine.execute(BuilderCommand::Zoom { delta_y: -120.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuilderCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Add raw deltas to the orbit (radians, radians, world units).
    NudgeCamera {
        /// Azimuth delta.
        azimuth: f32,
        /// Polar delta.
        polar: f32,
        /// Radius delta.
        radius: f32,
    },

    /// One configured camera step (toolbar button or key).
    StepCamera(CameraStep),

    /// Take the drag grab for `pointer_id`.
    BeginDrag {
        /// Pointer starting the drag.
        pointer_id: u32,
        /// Horizontal client position.
        x: f32,
        /// Vertical client position.
        y: f32,
    },

    /// Rotate by the movement since the last drag position. Ignored
    /// unless `pointer_id` owns the drag grab.
    ContinueDrag {
        /// Pointer that moved.
        pointer_id: u32,
        /// Horizontal client position.
        x: f32,
        /// Vertical client position.
        y: f32,
    },

    /// Release the drag grab if `pointer_id` owns it.
    EndDrag {
        /// Pointer that was released or left.
        pointer_id: u32,
    },

    /// Wheel zoom (DOM `deltaY`: positive zooms out).
    Zoom {
        /// Scroll amount in pixels.
        delta_y: f32,
    },

    // ── Blocks ──────────────────────────────────────────────────────
    /// Place or remove at a client-space pointer position.
    Interact {
        /// Horizontal client position.
        x: f32,
        /// Vertical client position.
        y: f32,
        /// Remove the block under the pointer instead of placing.
        remove: bool,
    },

    /// Change the material used by subsequent placements.
    SelectMaterial(Material),

    // ── Viewport ────────────────────────────────────────────────────
    /// The render surface changed size.
    Resize {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}

/// What executing a command changed. The host uses this to manage
/// pointer capture, resize its surface, and schedule redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    /// Nothing changed.
    Ignored,
    /// The camera moved.
    CameraMoved,
    /// A drag started; the host should capture this pointer.
    DragStarted {
        /// Pointer to capture.
        pointer_id: u32,
    },
    /// The drag ended; the host should release pointer capture.
    DragEnded {
        /// Pointer to release.
        pointer_id: u32,
    },
    /// A block was placed.
    Placed(BlockId),
    /// A block was removed.
    Removed(BlockId),
    /// The active material changed.
    MaterialSelected(Material),
    /// The viewport was resized; the host should resize its surface.
    Resized,
}

impl InputResponse {
    /// Whether the scene changed and the next frame will look different.
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Self::Ignored | Self::MaterialSelected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::mounted_engine;

    #[test]
    fn redraw_follows_visible_changes() {
        let (mut engine, _host) = mounted_engine();
        let moved = engine.execute(BuilderCommand::Zoom { delta_y: 50.0 });
        assert!(moved.needs_redraw());

        let idle = engine.execute(BuilderCommand::ContinueDrag {
            pointer_id: 0,
            x: 10.0,
            y: 10.0,
        });
        assert_eq!(idle, InputResponse::Ignored);
        assert!(!idle.needs_redraw());

        // Material only affects later placements.
        let selected =
            engine.execute(BuilderCommand::SelectMaterial(Material::Dirt));
        assert!(!selected.needs_redraw());

        let resized = engine.execute(BuilderCommand::Resize {
            width: 640.0,
            height: 480.0,
        });
        assert!(resized.needs_redraw());
    }
}

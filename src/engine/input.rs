//! Input & command dispatch for BuilderEngine

use super::{BuilderCommand, BuilderEngine, InputResponse};
use crate::input::InputEvent;
use crate::picking::{resolve_pointer, PickTarget};

impl BuilderEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the input processor decides what
    /// they mean and the resulting command is executed immediately.
    ///
    /// # Example
    ///
    /// ```ignore
    /// match engine.handle_input(InputEvent::PointerDown { .. }) {
    ///     InputResponse::DragStarted { pointer_id } => capture(pointer_id),
    ///     InputResponse::DragEnded { pointer_id } => release(pointer_id),
    ///     _ => {}
    /// }
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        match self.input.handle_event(event) {
            Some(command) => self.execute(command),
            None => InputResponse::Ignored,
        }
    }

    /// Look up a physical key string (`"ArrowLeft"`, `"Digit3"`) in the
    /// key bindings and execute the bound command.
    pub fn handle_key_press(&mut self, key: &str) -> InputResponse {
        match self.input.handle_key_press(key) {
            Some(command) => self.execute(command),
            None => InputResponse::Ignored,
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: BuilderCommand) -> InputResponse {
        match command {
            BuilderCommand::NudgeCamera {
                azimuth,
                polar,
                radius,
            } => {
                self.camera_controller.nudge(azimuth, polar, radius);
                InputResponse::CameraMoved
            }
            BuilderCommand::StepCamera(step) => {
                self.camera_controller.step(step);
                InputResponse::CameraMoved
            }
            BuilderCommand::BeginDrag { pointer_id, x, y } => {
                if self.camera_controller.begin_drag(pointer_id, x, y) {
                    InputResponse::DragStarted { pointer_id }
                } else {
                    log::debug!("pointer {pointer_id} ignored: drag in progress");
                    InputResponse::Ignored
                }
            }
            BuilderCommand::ContinueDrag { pointer_id, x, y } => {
                if self.camera_controller.continue_drag(pointer_id, x, y) {
                    InputResponse::CameraMoved
                } else {
                    InputResponse::Ignored
                }
            }
            BuilderCommand::EndDrag { pointer_id } => {
                if self.camera_controller.end_drag(pointer_id) {
                    InputResponse::DragEnded { pointer_id }
                } else {
                    InputResponse::Ignored
                }
            }
            BuilderCommand::Zoom { delta_y } => {
                self.camera_controller.wheel_zoom(delta_y);
                InputResponse::CameraMoved
            }
            BuilderCommand::Interact { x, y, remove } => {
                self.interact(x, y, remove)
            }
            BuilderCommand::SelectMaterial(material) => {
                log::debug!("active material: {material}");
                self.material = material;
                InputResponse::MaterialSelected(material)
            }
            BuilderCommand::Resize { width, height } => {
                self.resize(width, height)
            }
        }
    }

    /// Place or remove at a client-space pointer position.
    ///
    /// * Removing targets the block under the pointer; the ground is never
    ///   removed.
    /// * Placing on the ground fills the cell under the hit point.
    /// * Placing on a block fills the neighboring cell across the clicked
    ///   face.
    fn interact(&mut self, x: f32, y: f32, remove: bool) -> InputResponse {
        let Some(hit) = resolve_pointer(
            x,
            y,
            &self.viewport,
            &self.camera_controller.camera,
            &self.ground,
            &self.grid,
        ) else {
            log::debug!("pointer ({x}, {y}) hit nothing");
            return InputResponse::Ignored;
        };

        if remove {
            let PickTarget::Block(id) = hit.target else {
                return InputResponse::Ignored;
            };
            return match self.grid.remove(id) {
                Some(block) => {
                    log::debug!("removed {:?} block at {:?}", block.material, block.key);
                    InputResponse::Removed(block.id)
                }
                None => InputResponse::Ignored,
            };
        }

        let placed = match (hit.target, hit.normal) {
            (PickTarget::Ground, _) => self.grid.place(hit.point, self.material),
            (PickTarget::Block(_), Some(normal)) => {
                self.grid
                    .place_adjacent_to_face(hit.point, normal, self.material)
            }
            (PickTarget::Block(_), None) => None,
        };

        match placed {
            Some(id) => {
                log::debug!("placed {} block {id:?}", self.material);
                InputResponse::Placed(id)
            }
            None => {
                log::debug!("cell under ({x}, {y}) already occupied");
                InputResponse::Ignored
            }
        }
    }

    /// Recompute the camera aspect ratio for a new surface size. The
    /// orbit is untouched.
    fn resize(&mut self, width: f32, height: f32) -> InputResponse {
        if width <= 0.0 || height <= 0.0 {
            return InputResponse::Ignored;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        self.camera_controller.resize(width, height);
        InputResponse::Resized
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::CameraStep;
    use crate::engine::testing::mounted_engine;
    use crate::input::{Modifiers, PointerButton};
    use crate::scene::{CellKey, Material};

    /// Client-space position that projects onto `point`.
    fn screen_point(engine: &BuilderEngine, point: Vec3) -> (f32, f32) {
        let ndc = engine
            .camera_controller
            .camera
            .build_matrix()
            .project_point3(point);
        let vp = engine.viewport();
        (
            vp.left + (ndc.x + 1.0) * 0.5 * vp.width,
            vp.top + (1.0 - ndc.y) * 0.5 * vp.height,
        )
    }

    fn click(engine: &mut BuilderEngine, at: (f32, f32)) -> InputResponse {
        engine.handle_input(InputEvent::PointerDown {
            pointer_id: 1,
            x: at.0,
            y: at.1,
            button: PointerButton::Primary,
        })
    }

    fn set_modifiers(engine: &mut BuilderEngine, shift: bool, alt: bool) {
        let response = engine
            .handle_input(InputEvent::ModifiersChanged(Modifiers { shift, alt }));
        assert_eq!(response, InputResponse::Ignored);
    }

    #[test]
    fn click_on_ground_places_active_material() {
        let (mut engine, _host) = mounted_engine();
        let _ = engine.execute(BuilderCommand::SelectMaterial(Material::Stone));

        let at = screen_point(&engine, Vec3::new(2.1, 0.0, -3.2));
        let InputResponse::Placed(id) = click(&mut engine, at) else {
            panic!("expected a placement");
        };
        let block = engine.grid().find(id).unwrap();
        assert_eq!(block.key, CellKey { x: 2, layer: 0, z: -3 });
        assert_eq!(block.material, Material::Stone);
    }

    #[test]
    fn clicking_a_block_top_keeps_one_block_per_column() {
        let (mut engine, _host) = mounted_engine();
        let at = screen_point(&engine, Vec3::new(0.0, 0.0, 0.0));
        assert!(matches!(click(&mut engine, at), InputResponse::Placed(_)));

        // Top face of the new block: the neighbor across it is the same
        // (x, z) column, which is already taken.
        let top = screen_point(&engine, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(click(&mut engine, top), InputResponse::Ignored);
        assert_eq!(engine.grid().len(), 1);
    }

    #[test]
    fn clicking_a_block_side_places_neighbor() {
        let (mut engine, _host) = mounted_engine();
        let at = screen_point(&engine, Vec3::ZERO);
        let _ = click(&mut engine, at);

        // The default camera sits at +x/+z, so the +x face is visible.
        let side = screen_point(&engine, Vec3::new(0.5, 0.5, 0.0));
        let InputResponse::Placed(id) = click(&mut engine, side) else {
            panic!("expected a placement");
        };
        assert_eq!(
            engine.grid().find(id).unwrap().key,
            CellKey { x: 1, layer: 0, z: 0 }
        );
    }

    #[test]
    fn shift_click_removes_block_but_not_ground() {
        let (mut engine, _host) = mounted_engine();
        let at = screen_point(&engine, Vec3::new(-4.0, 0.0, 2.0));
        let InputResponse::Placed(id) = click(&mut engine, at) else {
            panic!("expected a placement");
        };

        set_modifiers(&mut engine, true, false);
        let top = screen_point(&engine, Vec3::new(-4.0, 1.0, 2.0));
        assert_eq!(click(&mut engine, top), InputResponse::Removed(id));
        assert!(engine.grid().is_empty());

        // Now only ground is under the pointer.
        assert_eq!(click(&mut engine, at), InputResponse::Ignored);
    }

    #[test]
    fn click_into_sky_is_ignored() {
        let (mut engine, _host) = mounted_engine();
        // Top edge of the viewport looks over the far side of the ground.
        assert_eq!(click(&mut engine, (400.0, 0.0)), InputResponse::Ignored);
        assert!(engine.grid().is_empty());
    }

    #[test]
    fn secondary_drag_rotates_and_foreign_release_is_ignored() {
        let (mut engine, _host) = mounted_engine();
        let start = engine.camera_controller.orbit();

        let response = engine.handle_input(InputEvent::PointerDown {
            pointer_id: 4,
            x: 100.0,
            y: 100.0,
            button: PointerButton::Secondary,
        });
        assert_eq!(response, InputResponse::DragStarted { pointer_id: 4 });

        let moved = engine.handle_input(InputEvent::PointerMove {
            pointer_id: 4,
            x: 120.0,
            y: 100.0,
        });
        assert_eq!(moved, InputResponse::CameraMoved);
        let after = engine.camera_controller.orbit();
        assert!((after.azimuth - (start.azimuth + 0.1)).abs() < 1e-4);

        let foreign = engine.handle_input(InputEvent::PointerUp { pointer_id: 9 });
        assert_eq!(foreign, InputResponse::Ignored);
        assert_eq!(engine.camera_controller.drag_pointer(), Some(4));

        let left = engine.handle_input(InputEvent::PointerLeave { pointer_id: 4 });
        assert_eq!(left, InputResponse::DragEnded { pointer_id: 4 });
        assert!(!engine.camera_controller.is_dragging());

        let idle = engine.handle_input(InputEvent::PointerMove {
            pointer_id: 4,
            x: 300.0,
            y: 300.0,
        });
        assert_eq!(idle, InputResponse::Ignored);
    }

    #[test]
    fn foreign_pointer_move_does_not_rotate() {
        let (mut engine, _host) = mounted_engine();
        let response = engine.handle_input(InputEvent::PointerDown {
            pointer_id: 4,
            x: 100.0,
            y: 100.0,
            button: PointerButton::Secondary,
        });
        assert_eq!(response, InputResponse::DragStarted { pointer_id: 4 });
        let before = engine.camera_controller.orbit();

        let foreign = engine.handle_input(InputEvent::PointerMove {
            pointer_id: 9,
            x: 700.0,
            y: 100.0,
        });
        assert_eq!(foreign, InputResponse::Ignored);
        assert_eq!(engine.camera_controller.orbit(), before);

        // The owner's next move is measured from its own last position.
        let owned = engine.handle_input(InputEvent::PointerMove {
            pointer_id: 4,
            x: 110.0,
            y: 100.0,
        });
        assert_eq!(owned, InputResponse::CameraMoved);
        let after = engine.camera_controller.orbit();
        assert!((after.azimuth - (before.azimuth + 0.05)).abs() < 1e-4);
    }

    #[test]
    fn alt_primary_drags_instead_of_placing() {
        let (mut engine, _host) = mounted_engine();
        set_modifiers(&mut engine, false, true);
        let at = screen_point(&engine, Vec3::ZERO);
        assert_eq!(
            click(&mut engine, at),
            InputResponse::DragStarted { pointer_id: 1 }
        );
        assert!(engine.grid().is_empty());
    }

    #[test]
    fn wheel_and_keys_move_camera() {
        let (mut engine, _host) = mounted_engine();
        let radius = engine.camera_controller.orbit().radius;

        let zoomed = engine.handle_input(InputEvent::Wheel { delta_y: 100.0 });
        assert_eq!(zoomed, InputResponse::CameraMoved);
        assert!((engine.camera_controller.orbit().radius - (radius + 2.0)).abs() < 1e-4);

        assert_eq!(engine.handle_key_press("Equal"), InputResponse::CameraMoved);
        assert!((engine.camera_controller.orbit().radius - radius).abs() < 1e-4);

        assert_eq!(
            engine.handle_key_press("Digit4"),
            InputResponse::MaterialSelected(Material::Wood)
        );
        assert_eq!(engine.material(), Material::Wood);
        assert_eq!(engine.handle_key_press("KeyQ"), InputResponse::Ignored);
    }

    #[test]
    fn step_command_matches_nudge() {
        let (mut a, _host_a) = mounted_engine();
        let (mut b, _host_b) = mounted_engine();
        let _ = a.execute(BuilderCommand::StepCamera(CameraStep::RotateRight));
        let _ = b.execute(BuilderCommand::NudgeCamera {
            azimuth: 0.2,
            polar: 0.0,
            radius: 0.0,
        });
        assert_eq!(a.camera_controller.orbit(), b.camera_controller.orbit());
    }

    #[test]
    fn resize_updates_aspect_not_orbit() {
        let (mut engine, _host) = mounted_engine();
        let orbit = engine.camera_controller.orbit();
        let response = engine.handle_input(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
        });
        assert_eq!(response, InputResponse::Resized);
        assert_eq!(engine.camera_controller.camera.aspect, 2.0);
        assert_eq!(engine.viewport().width, 1000.0);
        assert_eq!(engine.camera_controller.orbit(), orbit);

        let degenerate = engine.handle_input(InputEvent::Resized {
            width: 0.0,
            height: 500.0,
        });
        assert_eq!(degenerate, InputResponse::Ignored);
        assert_eq!(engine.viewport().width, 1000.0);
    }

    #[test]
    fn viewport_offset_shifts_pointer_mapping() {
        let (mut engine, _host) = mounted_engine();
        let at = screen_point(&engine, Vec3::new(3.0, 0.0, 3.0));
        engine.set_viewport_origin(50.0, 20.0);
        let InputResponse::Placed(id) =
            click(&mut engine, (at.0 + 50.0, at.1 + 20.0))
        else {
            panic!("expected a placement");
        };
        assert_eq!(
            engine.grid().find(id).unwrap().key,
            CellKey { x: 3, layer: 0, z: 3 }
        );
    }
}

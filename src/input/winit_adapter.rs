use winit::event::{
    ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent,
};
use winit::keyboard::PhysicalKey;

use super::event::{InputEvent, PointerButton};

/// Pointer identity used for the (single) system mouse.
pub const MOUSE_POINTER_ID: u32 = 0;

/// Pixels per wheel line, matching the browser's line-to-pixel scale.
const LINE_DELTA_PIXELS: f32 = 100.0;

/// Translates winit window events into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the translator
/// remembers the last cursor location and stamps it onto pointer-down
/// events.
#[derive(Debug, Default)]
pub struct WinitTranslator {
    cursor: (f32, f32),
}

impl WinitTranslator {
    /// Create a translator with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events the builder
    /// does not consume (focus, redraw, keyboard, etc.).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    pointer_id: MOUSE_POINTER_ID,
                    x: self.cursor.0,
                    y: self.cursor.1,
                })
            }
            WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeave {
                pointer_id: MOUSE_POINTER_ID,
            }),
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => Some(InputEvent::PointerDown {
                    pointer_id: MOUSE_POINTER_ID,
                    x: self.cursor.0,
                    y: self.cursor.1,
                    button: PointerButton::from(*button),
                }),
                ElementState::Released => Some(InputEvent::PointerUp {
                    pointer_id: MOUSE_POINTER_ID,
                }),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_DELTA_PIXELS,
                    MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
                };
                Some(InputEvent::Wheel { delta_y })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(InputEvent::ModifiersChanged(modifiers.state().into()))
            }
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width as f32,
                height: size.height as f32,
            }),
            WindowEvent::Touch(touch) => Some(Self::translate_touch(touch)),
            _ => None,
        }
    }

    /// Physical key string for a pressed key (`"ArrowLeft"`, `"Digit1"`),
    /// in the format [`KeybindingOptions`](crate::options::KeybindingOptions)
    /// expects.
    #[must_use]
    pub fn key_string(event: &WindowEvent) -> Option<String> {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return None;
        };
        if event.state != ElementState::Pressed {
            return None;
        }
        Self::physical_key_string(event.physical_key)
    }

    /// Binding string for a physical key, or `None` for keys winit could
    /// not identify.
    #[must_use]
    pub fn physical_key_string(key: PhysicalKey) -> Option<String> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        Some(format!("{code:?}"))
    }

    fn translate_touch(touch: &Touch) -> InputEvent {
        // Touch ids are u64 but unique per active contact; the low bits
        // are enough to tell concurrent fingers apart. Offset by one so a
        // finger never aliases the mouse.
        let pointer_id = (touch.id as u32).wrapping_add(1);
        let x = touch.location.x as f32;
        let y = touch.location.y as f32;
        match touch.phase {
            TouchPhase::Started => InputEvent::PointerDown {
                pointer_id,
                x,
                y,
                button: PointerButton::Primary,
            },
            TouchPhase::Moved => InputEvent::PointerMove { pointer_id, x, y },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                InputEvent::PointerUp { pointer_id }
            }
        }
    }
}

//! Converts raw platform events into builder commands.
//!
//! The `InputProcessor` owns the transient modifier state and the
//! key-binding map. It decides *which* interaction a pointer event means
//! (place, remove, or camera drag); the engine decides whether that
//! interaction actually changes anything.

use super::event::{InputEvent, Modifiers, PointerButton};
use crate::engine::BuilderCommand;
use crate::options::KeybindingOptions;

/// Converts raw input events into [`BuilderCommand`]s.
///
/// # Routing
///
/// | Event                                | Command                       |
/// |--------------------------------------|-------------------------------|
/// | primary down                         | `Interact` (place)            |
/// | primary down + shift                 | `Interact` (remove)           |
/// | secondary down, or primary + alt     | `BeginDrag`                   |
/// | move                                 | `ContinueDrag`                |
/// | up / leave                           | `EndDrag`                     |
/// | wheel                                | `Zoom`                        |
/// | resize                               | `Resize`                      |
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Digit2") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Current modifier key state.
    modifiers: Modifiers,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            modifiers: Modifiers::default(),
            key_bindings,
        }
    }

    /// Current modifier key state.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings (e.g. after loading a preset).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<BuilderCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<BuilderCommand> {
        match event {
            InputEvent::PointerDown {
                pointer_id,
                x,
                y,
                button,
            } => self.handle_pointer_down(pointer_id, x, y, button),
            InputEvent::PointerMove { pointer_id, x, y } => {
                Some(BuilderCommand::ContinueDrag { pointer_id, x, y })
            }
            InputEvent::PointerUp { pointer_id }
            | InputEvent::PointerLeave { pointer_id } => {
                Some(BuilderCommand::EndDrag { pointer_id })
            }
            InputEvent::Wheel { delta_y } => {
                Some(BuilderCommand::Zoom { delta_y })
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(BuilderCommand::Resize { width, height })
            }
        }
    }

    fn handle_pointer_down(
        &self,
        pointer_id: u32,
        x: f32,
        y: f32,
        button: PointerButton,
    ) -> Option<BuilderCommand> {
        match button {
            PointerButton::Secondary => {
                Some(BuilderCommand::BeginDrag { pointer_id, x, y })
            }
            PointerButton::Primary if self.modifiers.alt => {
                Some(BuilderCommand::BeginDrag { pointer_id, x, y })
            }
            PointerButton::Primary => Some(BuilderCommand::Interact {
                x,
                y,
                remove: self.modifiers.shift,
            }),
            PointerButton::Middle => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

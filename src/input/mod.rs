//! Input handling: event types, key actions, and the input processor
//! that converts raw window events into builder commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into builder commands.
pub mod processor;
/// Translation of winit window events.
#[cfg(feature = "viewer")]
pub mod winit_adapter;

pub use event::{InputEvent, Modifiers, PointerButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;

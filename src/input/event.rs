/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`BuilderCommand`](crate::engine::BuilderCommand)
/// values. Coordinates are client-space pixels, the same space the
/// [`Viewport`](crate::picking::Viewport) rectangle is expressed in.
///
/// # Example
///
/// ```ignore
/// let response = engine.handle_input(InputEvent::PointerDown {
///     pointer_id: 1,
///     x: 320.0,
///     y: 240.0,
///     button: PointerButton::Primary,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down over the viewport.
    PointerDown {
        /// Identity of the pointer (mouse, pen, or touch contact).
        pointer_id: u32,
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
        /// Which button was pressed.
        button: PointerButton,
    },
    /// A pointer moved over the viewport.
    PointerMove {
        /// Identity of the pointer.
        pointer_id: u32,
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// A pointer button was released.
    PointerUp {
        /// Identity of the pointer.
        pointer_id: u32,
    },
    /// A pointer left the viewport surface.
    PointerLeave {
        /// Identity of the pointer.
        pointer_id: u32,
    },
    /// Scroll wheel, in DOM `deltaY` convention (positive = scroll down =
    /// zoom out).
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged(Modifiers),
    /// The viewport was resized.
    Resized {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button, pen contact, or touch.
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// Modifier keys relevant to block interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift held: primary clicks remove instead of place.
    pub shift: bool,
    /// Alt held: primary presses start a camera drag.
    pub alt: bool,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            alt: state.alt_key(),
        }
    }
}

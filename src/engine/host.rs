//! The platform side of the engine's lifecycle.

use crate::error::BuilderError;
use crate::picking::Viewport;

/// Handle for a listener registered with the host at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Platform collaborator that owns the mount target, the rendering
/// surface, and window-level listeners.
///
/// [`BuilderEngine::mount`](super::BuilderEngine::mount) acquires resources
/// through this trait and
/// [`BuilderEngine::teardown`](super::BuilderEngine::teardown) gives every
/// one of them back exactly once.
pub trait Host {
    /// Client rectangle of the mount target, or `None` if there is no
    /// mount target yet.
    fn mount_viewport(&self) -> Option<Viewport>;

    /// Allocate the render surface for the mount target.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Surface`] if no rendering context can be
    /// created.
    fn acquire_surface(&mut self, viewport: &Viewport)
        -> Result<(), BuilderError>;

    /// Register a window-resize listener.
    fn add_resize_listener(&mut self) -> ListenerId;

    /// Unregister a listener returned by
    /// [`add_resize_listener`](Self::add_resize_listener).
    fn remove_listener(&mut self, id: ListenerId);

    /// Release the render surface.
    fn release_surface(&mut self);
}

//! Test doubles for the engine lifecycle.

use super::{BuilderEngine, Host, ListenerId};
use crate::error::BuilderError;
use crate::options::Options;
use crate::picking::Viewport;

/// Host that records every lifecycle call.
pub(crate) struct RecordingHost {
    pub viewport: Option<Viewport>,
    pub fail_surface: bool,
    pub surfaces_acquired: usize,
    pub surfaces_released: usize,
    pub listeners_removed: usize,
    pub active_listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl RecordingHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Some(Viewport::new(width, height)),
            fail_surface: false,
            surfaces_acquired: 0,
            surfaces_released: 0,
            listeners_removed: 0,
            active_listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn without_target() -> Self {
        Self {
            viewport: None,
            ..Self::new(0.0, 0.0)
        }
    }
}

impl Host for RecordingHost {
    fn mount_viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    fn acquire_surface(
        &mut self,
        _viewport: &Viewport,
    ) -> Result<(), BuilderError> {
        if self.fail_surface {
            return Err(BuilderError::Surface("no adapter".to_owned()));
        }
        self.surfaces_acquired += 1;
        Ok(())
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.active_listeners.push(id);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let before = self.active_listeners.len();
        self.active_listeners.retain(|active| *active != id);
        assert_eq!(
            self.active_listeners.len() + 1,
            before,
            "listener {id:?} removed twice or never added"
        );
        self.listeners_removed += 1;
    }

    fn release_surface(&mut self) {
        self.surfaces_released += 1;
    }
}

/// Engine mounted in a 800×600 viewport with default options.
pub(crate) fn mounted_engine() -> (BuilderEngine, RecordingHost) {
    mounted_engine_with(Options::default())
}

/// Engine mounted in a 800×600 viewport with `options`.
pub(crate) fn mounted_engine_with(
    options: Options,
) -> (BuilderEngine, RecordingHost) {
    let mut host = RecordingHost::new(800.0, 600.0);
    let engine = BuilderEngine::mount(&mut host, options)
        .unwrap()
        .unwrap();
    (engine, host)
}

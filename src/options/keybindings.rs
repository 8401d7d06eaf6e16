use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Physical keys for the builder's camera steps and material selection.
///
/// Keys are winit `KeyCode` names (`"ArrowLeft"`, `"Digit2"`), which are
/// also the DOM `KeyboardEvent.code` values.
pub struct KeybindingOptions {
    /// Action → key string, as written in presets.
    pub bindings: HashMap<KeyAction, String>,
    /// Key string → action. Derived from `bindings`, never serialized.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::RotateLeft, "ArrowLeft".into()),
            (KeyAction::RotateRight, "ArrowRight".into()),
            (KeyAction::TiltUp, "ArrowUp".into()),
            (KeyAction::TiltDown, "ArrowDown".into()),
            (KeyAction::ZoomIn, "Equal".into()),
            (KeyAction::ZoomOut, "Minus".into()),
            (KeyAction::SelectGrass, "Digit1".into()),
            (KeyAction::SelectDirt, "Digit2".into()),
            (KeyAction::SelectStone, "Digit3".into()),
            (KeyAction::SelectWood, "Digit4".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Re-derive key lookups from `bindings`. Call after editing
    /// `bindings` directly or deserializing.
    ///
    /// When two actions share a key, the one declared first in
    /// [`KeyAction`] keeps it.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        let mut actions: Vec<_> = self.bindings.iter().collect();
        actions.sort_unstable_by_key(|(action, _)| **action);
        for (action, key) in actions {
            if let Some(kept) = self.key_to_action.get(key) {
                log::warn!("key {key} bound to both {kept:?} and {action:?}");
                continue;
            }
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Move `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Action bound to a key string, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

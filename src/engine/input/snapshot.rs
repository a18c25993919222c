// Per-frame view of which keys are held

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use super::action::{Action, ControlScheme};

/// Set of keys held down at the moment the frame was sampled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: HashSet<KeyCode>,
}

impl InputSnapshot {
    /// Snapshot with nothing held
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from a list of held keys
    pub fn from_keys<I: IntoIterator<Item = KeyCode>>(keys: I) -> Self {
        Self {
            held: keys.into_iter().collect(),
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Check whether `action` is held under the given scheme
    pub fn holds(&self, controls: &ControlScheme, action: Action) -> bool {
        self.is_held(controls.key_for(action))
    }

    pub(crate) fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub(crate) fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub(crate) fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keys() {
        let snapshot = InputSnapshot::from_keys([KeyCode::KeyA, KeyCode::KeyF]);
        assert!(snapshot.is_held(KeyCode::KeyA));
        assert!(snapshot.is_held(KeyCode::KeyF));
        assert!(!snapshot.is_held(KeyCode::KeyD));
    }

    #[test]
    fn test_holds_uses_scheme() {
        let snapshot = InputSnapshot::from_keys([KeyCode::ArrowUp]);
        assert!(snapshot.holds(&ControlScheme::player_two(), Action::Jump));
        assert!(!snapshot.holds(&ControlScheme::player_one(), Action::Jump));
    }

    #[test]
    fn test_press_release() {
        let mut snapshot = InputSnapshot::empty();
        snapshot.press(KeyCode::KeyG);
        assert!(snapshot.is_held(KeyCode::KeyG));
        snapshot.release(KeyCode::KeyG);
        assert!(!snapshot.is_held(KeyCode::KeyG));
    }
}

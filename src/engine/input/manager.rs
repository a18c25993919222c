// Input manager - folds window keyboard events into a held-key snapshot

use log::debug;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::CANCEL_KEY;
use super::snapshot::InputSnapshot;

/// Tracks held keys between frames and latches the cancel signal
#[derive(Debug, Default)]
pub struct InputManager {
    snapshot: InputSnapshot,
    cancel_requested: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical key codes map to bindings
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state);
        }
    }

    /// Apply a single key transition
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if key == CANCEL_KEY && !self.cancel_requested {
                    debug!("Cancel requested");
                    self.cancel_requested = true;
                }
                self.snapshot.press(key);
            }
            ElementState::Released => self.snapshot.release(key),
        }
    }

    /// Request cancellation (e.g. the window was closed)
    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Forget held keys, e.g. when the window loses focus and releases would be missed
    pub fn release_all(&mut self) {
        self.snapshot.clear();
    }

    /// Current held-key snapshot, sampled once per frame
    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    /// Whether a cancel has been requested since the manager was created
    pub fn cancel_requested(&self) -> bool {
        self.cancel_requested
    }
}

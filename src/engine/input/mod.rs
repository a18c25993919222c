// Input handling system
//
// The simulation only asks "is this key held right now?", so input is reduced
// to a per-frame snapshot of held keys.
//
// ## Architecture
//
// - `action`: Fighter actions and the fixed per-slot control schemes
// - `snapshot`: Held-key set sampled once per frame
// - `manager`: Folds winit keyboard events into the snapshot
//
// ## Usage Example
//
// ```rust
// let mut input_manager = InputManager::new();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per frame, hand the snapshot to the simulation
// let outcome = round.step(input_manager.snapshot());
// ```

pub mod action;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
pub use action::{Action, ControlScheme, CANCEL_KEY};
pub use manager::InputManager;
pub use snapshot::InputSnapshot;

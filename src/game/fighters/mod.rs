// Fighter system
//
// This module contains everything related to the two combatants:
// - Fighter data and per-frame update operations
// - Dodge state machine

pub mod dodge;
pub mod fighter;

// Re-export commonly used types
pub use dodge::{Dodge, DodgePhase};
pub use fighter::{Color, Fighter, SOFT_BLUE, SOFT_RED};

// Rusted Fighter: two-player local fight simulation
//
// - `core`: rectangle geometry and frame timers
// - `engine`: frame clock, keyboard input, fighter physics and hitboxes
// - `game`: fight tuning, fighters, the round controller and the leaderboard

pub mod core;
pub mod engine;
pub mod game;

// Core primitives shared by the engine and game layers

pub mod rect;
pub mod timer;

pub use rect::Rect;
pub use timer::Cooldown;

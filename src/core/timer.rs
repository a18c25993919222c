// Frame-based countdown timers

/// Countdown measured in frames.
///
/// Shared by attack, skill and dodge cooldowns as well as the dodge timer.
/// A cooldown is "ready" once it has counted all the way down to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    /// Create a cooldown that is already ready
    pub const fn ready() -> Self {
        Self { remaining: 0 }
    }

    /// (Re)start the countdown from `frames`
    pub fn start(&mut self, frames: u32) {
        self.remaining = frames;
    }

    /// Advance one frame, never going below zero
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Frames left before the cooldown is ready
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_ready(&self) -> bool {
        self.remaining == 0
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}

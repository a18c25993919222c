// Dodge state machine

use crate::core::Cooldown;

/// Observable phase of a fighter's dodge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DodgePhase {
    /// Ready to dodge (subject to being grounded)
    #[default]
    Idle,
    /// Dashing in the facing direction, immune to hits
    Dodging,
    /// Dodge finished, waiting for the cooldown to expire
    CoolingDown,
}

impl DodgePhase {
    /// Check if the fighter ignores incoming damage in this phase
    pub fn is_invulnerable(&self) -> bool {
        matches!(self, Self::Dodging)
    }
}

/// Dodge timer and cooldown
///
/// Transitions:
/// - `Idle -> Dodging` when dodge is held, the cooldown is ready and the
///   fighter is grounded. Starts both the timer and the cooldown.
/// - `Dodging -> CoolingDown | Idle` once the timer reaches zero.
/// - `CoolingDown -> Idle` once the cooldown reaches zero.
///
/// The cooldown ticks every frame whatever the phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dodge {
    timer: Cooldown,
    cooldown: Cooldown,
}

impl Dodge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase derived from the two counters
    pub fn phase(&self) -> DodgePhase {
        if self.timer.is_active() {
            DodgePhase::Dodging
        } else if self.cooldown.is_active() {
            DodgePhase::CoolingDown
        } else {
            DodgePhase::Idle
        }
    }

    pub fn is_dodging(&self) -> bool {
        self.phase() == DodgePhase::Dodging
    }

    /// Frames of invulnerability left
    pub fn timer(&self) -> u32 {
        self.timer.remaining()
    }

    /// Frames until another dodge is allowed
    pub fn cooldown(&self) -> u32 {
        self.cooldown.remaining()
    }

    /// Advance one frame.
    ///
    /// Returns `true` when the fighter should dash this frame. The frame a
    /// dodge starts does not dash; the following `duration` frames do.
    pub fn update(
        &mut self,
        dodge_held: bool,
        on_ground: bool,
        duration: u32,
        cooldown: u32,
    ) -> bool {
        self.cooldown.tick();

        if self.timer.is_active() {
            self.timer.tick();
            return true;
        }

        if dodge_held && self.cooldown.is_ready() && on_ground {
            self.timer.start(duration);
            self.cooldown.start(cooldown);
        }

        false
    }
}

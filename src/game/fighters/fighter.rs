// Fighter entity: body, combat resources and per-frame update operations

use log::debug;

use crate::core::{Cooldown, Rect};
use crate::engine::input::{Action, ControlScheme, InputSnapshot};
use crate::engine::physics::{directional_hitbox, lands_hit, Body, HitboxShape};
use crate::game::config::FightConfig;

use super::dodge::{Dodge, DodgePhase};

/// RGB color used by the renderer
pub type Color = [u8; 3];

pub const SOFT_RED: Color = [200, 70, 70];
pub const SOFT_BLUE: Color = [70, 120, 220];

/// One combatant's full physical and combat state for a round
#[derive(Debug, Clone)]
pub struct Fighter {
    /// Display name, also the leaderboard key
    pub name: String,
    pub color: Color,
    controls: ControlScheme,

    // Physics
    pub body: Body,
    pub facing_right: bool,

    // Combat state
    health: i32,
    energy: f32,
    attack_cooldown: Cooldown,
    skill_cooldown: Cooldown,
    dodge: Dodge,
}

impl Fighter {
    /// Create a fighter standing at `x` on the ground line
    pub fn new(
        name: &str,
        color: Color,
        controls: ControlScheme,
        x: i32,
        facing_right: bool,
        cfg: &FightConfig,
    ) -> Self {
        let mut rect = Rect::new(x, 0, cfg.fighter_width, cfg.fighter_height);
        rect.set_bottom(cfg.ground_level);

        let mut body = Body::new(rect);
        body.clamp_to_arena(cfg.arena_width);

        Self {
            name: clean_name(name, cfg.max_name_len),
            color,
            controls,
            body,
            facing_right,
            health: cfg.max_health,
            energy: cfg.max_energy,
            attack_cooldown: Cooldown::ready(),
            skill_cooldown: Cooldown::ready(),
            dodge: Dodge::new(),
        }
    }

    /// Left slot: red, a quarter of the way in, facing right
    pub fn player_one(name: &str, cfg: &FightConfig) -> Self {
        Self::new(
            name,
            SOFT_RED,
            ControlScheme::player_one(),
            cfg.arena_width / 4,
            true,
            cfg,
        )
    }

    /// Right slot: blue, three quarters of the way in, facing left
    pub fn player_two(name: &str, cfg: &FightConfig) -> Self {
        Self::new(
            name,
            SOFT_BLUE,
            ControlScheme::player_two(),
            3 * cfg.arena_width / 4,
            false,
            cfg,
        )
    }

    pub fn controls(&self) -> &ControlScheme {
        &self.controls
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown.remaining()
    }

    pub fn skill_cooldown(&self) -> u32 {
        self.skill_cooldown.remaining()
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    pub fn dodge(&self) -> &Dodge {
        &self.dodge
    }

    pub fn dodge_phase(&self) -> DodgePhase {
        self.dodge.phase()
    }

    pub fn is_dodging(&self) -> bool {
        self.dodge.is_dodging()
    }

    /// Whether incoming hits are ignored this frame
    pub fn is_invulnerable(&self) -> bool {
        self.dodge_phase().is_invulnerable()
    }

    pub fn is_knocked_out(&self) -> bool {
        self.health <= 0
    }

    /// Horizontal movement and jumping
    ///
    /// Does nothing while dodging. Left is applied before right, so holding
    /// both moves nowhere but leaves the fighter facing right.
    pub fn handle_movement(&mut self, input: &InputSnapshot, cfg: &FightConfig) {
        if self.is_dodging() {
            return;
        }

        if input.holds(&self.controls, Action::MoveLeft) {
            self.body.shift_x(-cfg.move_speed);
            self.facing_right = false;
        }
        if input.holds(&self.controls, Action::MoveRight) {
            self.body.shift_x(cfg.move_speed);
            self.facing_right = true;
        }
        self.body.clamp_to_arena(cfg.arena_width);

        if input.holds(&self.controls, Action::Jump) && self.body.jump(cfg.jump_strength) {
            debug!("{} jumps", self.name);
        }
    }

    pub fn apply_gravity(&mut self, cfg: &FightConfig) {
        self.body.apply_gravity(cfg.gravity, cfg.ground_level);
    }

    /// Advance the dodge state machine and dash while dodging
    pub fn update_dodge(&mut self, input: &InputSnapshot, cfg: &FightConfig) {
        let was_dodging = self.is_dodging();
        let dashing = self.dodge.update(
            input.holds(&self.controls, Action::Dodge),
            self.body.on_ground,
            cfg.dodge_duration,
            cfg.dodge_cooldown,
        );

        if dashing {
            let direction = if self.facing_right { 1 } else { -1 };
            self.body.shift_x(cfg.dodge_speed * direction);
            self.body.clamp_to_arena(cfg.arena_width);
        }

        if !was_dodging && self.is_dodging() {
            debug!("{} dodges", self.name);
        }
    }

    /// Regain energy, capped at the maximum
    pub fn regenerate_energy(&mut self, cfg: &FightConfig) {
        if self.energy < cfg.max_energy {
            self.energy = (self.energy + cfg.energy_regen_rate).min(cfg.max_energy);
        }
    }

    /// Try a basic attack against `opponent`.
    ///
    /// While the cooldown runs it ticks down and nothing happens. Otherwise a
    /// held attack key always starts the cooldown, hit or miss. Returns
    /// whether the attack connected.
    pub fn attempt_attack(
        &mut self,
        opponent: &Fighter,
        input: &InputSnapshot,
        cfg: &FightConfig,
    ) -> bool {
        if self.attack_cooldown.is_active() {
            self.attack_cooldown.tick();
            return false;
        }

        if !input.holds(&self.controls, Action::Attack) {
            return false;
        }

        self.attack_cooldown.start(cfg.attack_cooldown);

        let shape = HitboxShape::new(cfg.attack_range, cfg.attack_inset);
        let hitbox = directional_hitbox(&self.body.rect, self.facing_right, shape);
        lands_hit(&hitbox, opponent.rect(), opponent.is_invulnerable())
    }

    /// Try the special skill against `opponent`.
    ///
    /// Needs the cooldown ready and enough energy; a failed attempt costs
    /// nothing. The skill hitbox spans the full fighter height.
    pub fn attempt_special_skill(
        &mut self,
        opponent: &Fighter,
        input: &InputSnapshot,
        cfg: &FightConfig,
    ) -> bool {
        if self.skill_cooldown.is_active() {
            self.skill_cooldown.tick();
            return false;
        }

        if !input.holds(&self.controls, Action::Skill) || self.energy < cfg.skill_energy_cost {
            return false;
        }

        self.energy -= cfg.skill_energy_cost;
        self.skill_cooldown.start(cfg.skill_cooldown);
        debug!("{} uses skill ({:.1} energy left)", self.name, self.energy);

        let shape = HitboxShape::new(cfg.skill_range(), 0);
        let hitbox = directional_hitbox(&self.body.rect, self.facing_right, shape);
        lands_hit(&hitbox, opponent.rect(), opponent.is_invulnerable())
    }

    /// Apply damage, flooring health at zero
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    // HUD helpers

    pub fn health_ratio(&self, cfg: &FightConfig) -> f32 {
        self.health.max(0) as f32 / cfg.max_health as f32
    }

    pub fn energy_ratio(&self, cfg: &FightConfig) -> f32 {
        self.energy.max(0.0) / cfg.max_energy
    }

    /// Whole seconds left on the skill cooldown, rounded up; `None` when ready
    pub fn skill_cooldown_secs(&self, fps: u32) -> Option<u32> {
        self.skill_cooldown
            .is_active()
            .then(|| self.skill_cooldown.remaining() / fps.max(1) + 1)
    }
}

fn clean_name(name: &str, max_len: usize) -> String {
    name.trim().chars().take(max_len).collect()
}

// Fight tuning, loaded once at startup

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

/// Configuration validation errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("ground_level {ground} must lie within the arena height {height}")]
    GroundOutsideArena { ground: i32, height: i32 },

    #[error("fighter does not fit in the arena ({fighter} > {arena})")]
    FighterTooLarge { fighter: i32, arena: i32 },

    #[error("skill_energy_cost {cost} exceeds max_energy {max}")]
    SkillUnaffordable { cost: f32, max: f32 },

    #[error("attack_inset {inset} leaves no hitbox height on a {height}-tall fighter")]
    InsetTooLarge { inset: i32, height: i32 },
}

/// Every constant the fight simulation consumes
///
/// Distances are in screen units, durations in frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FightConfig {
    // Arena
    pub arena_width: i32,
    pub arena_height: i32,
    /// Y coordinate fighters stand on
    pub ground_level: i32,
    pub target_fps: u32,

    // Fighter body
    pub fighter_width: i32,
    pub fighter_height: i32,
    pub max_name_len: usize,

    // Movement
    pub gravity: f32,
    pub move_speed: i32,
    pub jump_strength: f32,

    // Basic attack
    pub attack_range: i32,
    /// Vertical margin trimmed from top and bottom of the attack hitbox
    pub attack_inset: i32,
    pub attack_cooldown: u32,
    pub attack_damage: i32,
    pub max_health: i32,

    // Dodge
    pub dodge_duration: u32,
    pub dodge_cooldown: u32,
    pub dodge_speed: i32,

    // Special skill
    pub skill_damage: i32,
    pub skill_cooldown: u32,
    pub skill_energy_cost: f32,
    /// Skill reach as a multiple of `attack_range`
    pub skill_range_multiplier: f32,
    pub max_energy: f32,
    /// Energy regained per frame
    pub energy_regen_rate: f32,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            arena_width: 960,
            arena_height: 540,
            ground_level: 460,
            target_fps: 60,

            fighter_width: 60,
            fighter_height: 120,
            max_name_len: 12,

            gravity: 1.0,
            move_speed: 6,
            jump_strength: 18.0,

            attack_range: 80,
            attack_inset: 20,
            attack_cooldown: 20,
            attack_damage: 12,
            max_health: 100,

            dodge_duration: 15,
            dodge_cooldown: 90,
            dodge_speed: 12,

            skill_damage: 25,
            skill_cooldown: 180,
            skill_energy_cost: 50.0,
            skill_range_multiplier: 1.5,
            max_energy: 100.0,
            energy_regen_rate: 0.3,
        }
    }
}

impl FightConfig {
    /// Load config from a TOML file, falling back to defaults.
    ///
    /// A missing or malformed file yields the default tuning, as does a
    /// file that parses but fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let config = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<FightConfig>(&content) {
                Ok(cfg) => {
                    info!("Loaded fight configuration from {}", path.display());
                    cfg
                }
                Err(e) => {
                    warn!("Failed to parse {}: {e}, using defaults", path.display());
                    FightConfig::default()
                }
            },
            Err(_) => {
                info!("No {} found, using defaults", path.display());
                FightConfig::default()
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid fight configuration: {e}, using defaults");
                FightConfig::default()
            }
        }
    }

    /// Check the tuning describes a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena_width", f64::from(self.arena_width))?;
        positive("arena_height", f64::from(self.arena_height))?;
        positive("fighter_width", f64::from(self.fighter_width))?;
        positive("fighter_height", f64::from(self.fighter_height))?;
        positive("target_fps", f64::from(self.target_fps))?;
        positive("max_health", f64::from(self.max_health))?;
        positive("max_energy", f64::from(self.max_energy))?;
        positive("max_name_len", self.max_name_len as f64)?;

        positive("gravity", f64::from(self.gravity))?;
        positive("move_speed", f64::from(self.move_speed))?;
        positive("jump_strength", f64::from(self.jump_strength))?;
        positive("attack_range", f64::from(self.attack_range))?;
        positive("attack_damage", f64::from(self.attack_damage))?;
        positive("dodge_speed", f64::from(self.dodge_speed))?;
        positive("skill_damage", f64::from(self.skill_damage))?;
        positive("skill_energy_cost", f64::from(self.skill_energy_cost))?;
        positive("skill_range_multiplier", f64::from(self.skill_range_multiplier))?;
        positive("energy_regen_rate", f64::from(self.energy_regen_rate))?;

        if self.ground_level <= 0 || self.ground_level > self.arena_height {
            return Err(ConfigError::GroundOutsideArena {
                ground: self.ground_level,
                height: self.arena_height,
            });
        }
        if self.fighter_width > self.arena_width {
            return Err(ConfigError::FighterTooLarge {
                fighter: self.fighter_width,
                arena: self.arena_width,
            });
        }
        if self.fighter_height > self.ground_level {
            return Err(ConfigError::FighterTooLarge {
                fighter: self.fighter_height,
                arena: self.ground_level,
            });
        }
        if self.skill_energy_cost > self.max_energy {
            return Err(ConfigError::SkillUnaffordable {
                cost: self.skill_energy_cost,
                max: self.max_energy,
            });
        }
        if self.attack_inset < 0 || 2 * self.attack_inset >= self.fighter_height {
            return Err(ConfigError::InsetTooLarge {
                inset: self.attack_inset,
                height: self.fighter_height,
            });
        }

        Ok(())
    }

    /// Reach of the special skill hitbox
    pub fn skill_range(&self) -> i32 {
        (self.attack_range as f32 * self.skill_range_multiplier) as i32
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

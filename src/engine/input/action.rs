// Fighter actions and their fixed key bindings

use winit::keyboard::KeyCode;

/// Logical actions a fighter can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
    Dodge,
    Skill,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Attack,
        Action::Dodge,
        Action::Skill,
    ];
}

/// Key bindings for one fighter slot
///
/// Fields are private so a scheme cannot be remapped once a fighter owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    left: KeyCode,
    right: KeyCode,
    jump: KeyCode,
    attack: KeyCode,
    dodge: KeyCode,
    skill: KeyCode,
}

impl ControlScheme {
    pub const fn new(
        left: KeyCode,
        right: KeyCode,
        jump: KeyCode,
        attack: KeyCode,
        dodge: KeyCode,
        skill: KeyCode,
    ) -> Self {
        Self {
            left,
            right,
            jump,
            attack,
            dodge,
            skill,
        }
    }

    /// Player 1: A/D move, W jump, F attack, G dodge, H skill
    pub const fn player_one() -> Self {
        Self::new(
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyW,
            KeyCode::KeyF,
            KeyCode::KeyG,
            KeyCode::KeyH,
        )
    }

    /// Player 2: arrows move/jump, K attack, L dodge, ; skill
    pub const fn player_two() -> Self {
        Self::new(
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
            KeyCode::KeyK,
            KeyCode::KeyL,
            KeyCode::Semicolon,
        )
    }

    /// Get the key bound to an action
    pub fn key_for(&self, action: Action) -> KeyCode {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Jump => self.jump,
            Action::Attack => self.attack,
            Action::Dodge => self.dodge,
            Action::Skill => self.skill,
        }
    }
}

/// Key that cancels the current round
pub const CANCEL_KEY: KeyCode = KeyCode::Escape;

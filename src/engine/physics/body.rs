// Kinematic fighter body: position, vertical velocity and ground contact

use glam::IVec2;

use crate::core::Rect;

/// Physical state of a fighter
///
/// Horizontal motion is applied directly to the rectangle each frame; only
/// the vertical axis carries velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Bounding rectangle in screen space
    pub rect: Rect,
    /// Vertical velocity in units per frame (negative is upward)
    pub velocity_y: f32,
    /// Whether the body is resting on the ground line
    pub on_ground: bool,
}

impl Body {
    /// Create a grounded body at rest
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity_y: 0.0,
            on_ground: true,
        }
    }

    /// Integrate gravity for one frame.
    ///
    /// Explicit Euler with a ground clamp: velocity is increased first, then
    /// the rectangle moves by the velocity truncated toward zero. There is no
    /// sub-step sweep, so a body falling faster than its own height per frame
    /// could tunnel past the ground line. With the stock constants the peak
    /// fall speed stays far below that.
    pub fn apply_gravity(&mut self, gravity: f32, ground_level: i32) {
        if self.on_ground {
            return;
        }

        self.velocity_y += gravity;
        self.rect.translate(IVec2::new(0, self.velocity_y as i32));

        if self.rect.bottom() >= ground_level {
            self.rect.set_bottom(ground_level);
            self.velocity_y = 0.0;
            self.on_ground = true;
        }
    }

    /// Shift horizontally without clamping
    pub fn shift_x(&mut self, dx: i32) {
        self.rect.translate(IVec2::new(dx, 0));
    }

    /// Clamp the body inside `[0, arena_width - width]`
    pub fn clamp_to_arena(&mut self, arena_width: i32) {
        let max_x = (arena_width - self.rect.width()).max(0);
        self.rect.set_x(self.rect.left().clamp(0, max_x));
    }

    /// Launch upward. Ignored while airborne.
    pub fn jump(&mut self, strength: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.on_ground = false;
        self.velocity_y = -strength;
        true
    }
}

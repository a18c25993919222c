// Hitbox construction and hit detection
//
// Hits are tested once per frame against post-movement rectangles. There is
// no swept test, so a target moving faster than the hitbox is wide could slip
// through between frames; per-frame displacement is small next to hitbox size.

use crate::core::Rect;

/// Shape parameters for a directional hitbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitboxShape {
    /// Horizontal reach beyond the attacker's leading edge
    pub range: i32,
    /// Vertical margin trimmed from both top and bottom of the attacker
    pub inset: i32,
}

impl HitboxShape {
    pub const fn new(range: i32, inset: i32) -> Self {
        Self { range, inset }
    }
}

/// Build the hitbox in front of `body`.
///
/// Facing right, the box starts at the body's right edge and extends
/// `range` to the right; facing left, it ends at the body's left edge.
pub fn directional_hitbox(body: &Rect, facing_right: bool, shape: HitboxShape) -> Rect {
    let x = if facing_right {
        body.right()
    } else {
        body.left() - shape.range
    };

    Rect::new(
        x,
        body.top() + shape.inset,
        shape.range,
        body.height() - 2 * shape.inset,
    )
}

/// A hit lands when the hitbox overlaps the target and the target is not invulnerable
pub fn lands_hit(hitbox: &Rect, target: &Rect, target_invulnerable: bool) -> bool {
    !target_invulnerable && hitbox.intersects(target)
}

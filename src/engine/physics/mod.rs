// Fighter physics: a hand-rolled kinematic integrator and hitbox geometry

pub mod body;
pub mod collision;

pub use body::Body;
pub use collision::{directional_hitbox, lands_hit, HitboxShape};

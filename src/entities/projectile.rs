//! Projectile data.  Positions are floats so sub-cell speeds stay smooth;
//! the `spent` flag keeps a projectile consumed by one collision from being
//! matched against anything else in the same tick.

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub spent: bool,
}

#[derive(Clone, Debug)]
pub struct EnemyProjectile {
    pub x: f32,
    pub y: f32,
    pub spent: bool,
}

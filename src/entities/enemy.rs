//! Enemy data and the type-attribute tables.
//!
//! An enemy's numeric type (0–8) fixes everything about it: tier, movement
//! pattern, health, whether it shoots, what it scores and what it drops.

use crate::config;

use super::LifeState;

/// Capability partition of the type range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyTier {
    /// Types 0–2: one hit, no weapon.
    Basic,
    /// Types 3–5: one hit, fires downward.
    Shooting,
    /// Types 6–8: three hits, fires, large.
    Boss,
}

/// Movement pattern, derived from the type as `type % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementPattern {
    /// Straight descent with a small additive horizontal wobble.
    Drift,
    /// Horizontal sine oscillation around the spawn column.
    Sine,
    /// Constant sideways velocity that reflects at the field edges.
    Bounce,
}

/// Numeric enemy type, 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyType(pub u8);

impl EnemyType {
    pub const MAX: u8 = 8;

    pub fn tier(self) -> EnemyTier {
        if self.0 >= 6 {
            EnemyTier::Boss
        } else if self.0 >= 3 {
            EnemyTier::Shooting
        } else {
            EnemyTier::Basic
        }
    }

    pub fn can_shoot(self) -> bool {
        self.0 >= 3
    }

    pub fn max_health(self) -> i32 {
        if self.0 >= 6 {
            3
        } else {
            1
        }
    }

    pub fn pattern(self) -> MovementPattern {
        match self.0 % 3 {
            0 => MovementPattern::Drift,
            1 => MovementPattern::Sine,
            _ => MovementPattern::Bounce,
        }
    }

    /// Score awarded when destroyed.
    pub fn score_value(self) -> u32 {
        match self.tier() {
            EnemyTier::Boss => config::SCORE_BOSS,
            EnemyTier::Shooting => config::SCORE_SHOOTING,
            EnemyTier::Basic => match self.pattern() {
                MovementPattern::Drift => config::SCORE_BASIC_DRIFT,
                _ => config::SCORE_BASIC_OTHER,
            },
        }
    }

    /// Score lost when it escapes off the bottom.
    pub fn escape_penalty(self) -> u32 {
        match self.tier() {
            EnemyTier::Boss => config::ESCAPE_PENALTY_BOSS,
            _ => config::ESCAPE_PENALTY_BASIC,
        }
    }

    /// Probability of dropping a powerup on destruction.
    pub fn drop_chance(self) -> f64 {
        match self.tier() {
            EnemyTier::Boss => config::DROP_CHANCE_BOSS,
            EnemyTier::Shooting => config::DROP_CHANCE_SHOOTING,
            EnemyTier::Basic => config::DROP_CHANCE_BASIC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyType,
    pub pattern: MovementPattern,
    pub health: i32,
    /// Descent speed, jittered per instance at spawn.
    pub speed: f32,
    /// Horizontal velocity (Bounce pattern only).
    pub vx: f32,
    /// Spawn column the Sine pattern oscillates around.
    pub home_x: f32,
    pub amplitude: f32,
    pub frequency: f32,
    /// Ticks between shots, fixed at spawn (shooting tiers).
    pub fire_delay: u32,
    pub fire_timer: u32,
    pub ticks_alive: u32,
    /// Damage-flash countdown; rendered white while nonzero.
    pub flash: u32,
    pub life: LifeState,
}

impl Enemy {
    /// Fraction of health remaining, for the boss health bar.
    pub fn health_percent(&self) -> f32 {
        self.health.max(0) as f32 / self.kind.max_health() as f32
    }
}

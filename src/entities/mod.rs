//! All game entity types — pure data plus intrinsic attribute tables.
//!
//! Nothing in this module mutates game state; transitions live in
//! `compute`.  Everything is `Clone` so the pure update functions can
//! return a fresh state without touching the original.

mod enemy;
mod player;
mod powerup;
mod projectile;

pub use enemy::{Enemy, EnemyTier, EnemyType, MovementPattern};
pub use player::Player;
pub use powerup::{Powerup, PowerupKind};
pub use projectile::{EnemyProjectile, Projectile};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Player destroyed; the scene lingers for a short delay.
    Dying,
    GameOver,
}

/// Why the session ended.  Escaping enemies only cost score, so ship
/// destruction is the one terminal cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    ShipDestroyed,
}

/// Entity lifecycle.  Collision and escape handlers only ever act on
/// `Active` entities; `Destroying` marks death effects as already emitted
/// and `Destroyed` marks a silent removal (escape).  Both are swept from
/// the collections at the end of the tick, which makes teardown idempotent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeState {
    Active,
    Destroying,
    Destroyed,
}

// ── Cosmetic entities ─────────────────────────────────────────────────────────

/// A brief burst rendered for a few ticks where something blew up.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub ticks_left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    ScorePop,
    Penalty,
    LevelUp,
    BossWarning,
    BossEscaped,
    PowerupPickup,
    Overheat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeAnchor {
    /// Anchored at a play-field cell (score pops drift upward from it).
    Cell(i32, i32),
    /// Centered mid-screen.
    Center,
    /// Centered near the top of the play area.
    TopCenter,
}

/// A transient on-screen text (score pop, level-up banner, boss warning...).
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub anchor: NoticeAnchor,
    pub ticks_left: u32,
    pub ticks_total: u32,
}

impl Notice {
    pub fn at(kind: NoticeKind, text: String, x: i32, y: i32) -> Notice {
        Notice {
            kind,
            text,
            anchor: NoticeAnchor::Cell(x, y),
            ticks_left: config::NOTICE_TICKS,
            ticks_total: config::NOTICE_TICKS,
        }
    }

    pub fn banner(kind: NoticeKind, text: impl Into<String>) -> Notice {
        let anchor = match kind {
            NoticeKind::PowerupPickup | NoticeKind::Overheat => NoticeAnchor::TopCenter,
            _ => NoticeAnchor::Center,
        };
        Notice {
            kind,
            text: text.into(),
            anchor,
            ticks_left: config::BANNER_TICKS,
            ticks_total: config::BANNER_TICKS,
        }
    }

    /// Rows an anchored notice has drifted upward since it appeared.
    pub fn rise(&self) -> i32 {
        ((self.ticks_total - self.ticks_left) / 5) as i32
    }
}

/// A wave member waiting out its stagger delay before spawning.
#[derive(Clone, Copy, Debug)]
pub struct PendingSpawn {
    pub delay: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one game session.  Owned by the scene flow
/// controller; only `high_score` outlives it.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<EnemyProjectile>,
    pub powerups: Vec<Powerup>,
    pub explosions: Vec<Explosion>,
    pub notices: Vec<Notice>,
    pub pending_spawns: Vec<PendingSpawn>,
    pub score: u32,
    pub high_score: u32,
    /// Difficulty level, starting at 1 and raised on a fixed cadence.
    pub level: u32,
    /// Current base descent speed for newly spawned enemies.
    pub enemy_speed: f32,
    /// Ticks between spawn decisions, shrinking with difficulty.
    pub spawn_delay: u32,
    pub spawn_timer: u32,
    pub difficulty_timer: u32,
    /// Live-enemy cap; spawn decisions are skipped at or above it.
    pub max_enemies: usize,
    pub enemies_per_wave: u32,
    pub boss_active: bool,
    pub ships_escaped: u32,
    pub status: GameStatus,
    pub death_timer: u32,
    pub death_reason: Option<DeathReason>,
    pub tick: u64,
    pub width: u16,
    pub height: u16,
}

impl GameState {
    /// Bottom boundary row; an enemy at or past it has escaped.
    pub fn bottom(&self) -> i32 {
        self.height as i32 - 2
    }

    pub fn live_enemies(&self) -> usize {
        self.enemies
            .iter()
            .filter(|e| e.life == LifeState::Active)
            .count()
    }
}

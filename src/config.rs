//! Gameplay tuning tables.
//!
//! Every threshold the simulation consults lives here under a name, so the
//! difficulty curve can be retuned without touching game logic.  Durations
//! are in simulation ticks (30 per second), distances in play-field cells,
//! speeds in cells per tick.

/// Simulation rate.  The frame loop sleeps ~33 ms per tick.
pub const TICKS_PER_SEC: u32 = 30;

// ── Field layout ─────────────────────────────────────────────────────────────

/// First playable row (row 0 is the HUD, row 1 the top border).
pub const PLAY_TOP: i32 = 2;

// ── Player ───────────────────────────────────────────────────────────────────

/// Cells moved per horizontal input step.
pub const PLAYER_STEP_X: i32 = 2;
/// Cells moved per vertical input step.
pub const PLAYER_STEP_Y: i32 = 1;
/// Ticks between shots (~350 ms).
pub const PLAYER_FIRE_DELAY: u32 = 10;
/// Fire delay can never be pushed below this by powerups (~150 ms).
pub const PLAYER_MIN_FIRE_DELAY: u32 = 5;
/// Concurrent player projectiles allowed at game start.
pub const PLAYER_MAX_PROJECTILES: usize = 3;
/// Hard cap the extra-projectile powerup can reach.
pub const PLAYER_PROJECTILE_CAP: usize = 6;

// ── Weapon heat ──────────────────────────────────────────────────────────────

pub const HEAT_MAX: f32 = 100.0;
/// Heat added per shot.
pub const HEAT_RATE: f32 = 35.0;
/// Heat rate can never be pushed below this by powerups.
pub const HEAT_RATE_FLOOR: f32 = 5.0;
/// Passive heat drain per tick (18 heat per second).
pub const COOLING_RATE: f32 = 0.6;
/// Heat holds at the maximum for this long after an overheat (~1.5 s).
pub const OVERHEAT_HOLD_TICKS: u32 = 45;
/// Heat level the weapon falls back to once the overheat hold ends.
pub const OVERHEAT_RESET_HEAT: f32 = 80.0;

// ── Powerups ─────────────────────────────────────────────────────────────────

/// Falling speed of a dropped powerup.
pub const POWERUP_FALL_SPEED: f32 = 0.25;
/// Faster-firing effect duration (10 s).
pub const FAST_FIRING_TICKS: u32 = 300;
/// Faster firing multiplies fire delay and heat rate by this.
pub const FAST_FIRING_FACTOR: f32 = 0.8;
/// Rapid cooling multiplies the heat rate by this.
pub const RAPID_COOLING_HEAT_FACTOR: f32 = 0.7;
/// Rapid cooling multiplies the cooling rate by this.
pub const RAPID_COOLING_BOOST: f32 = 2.0;
/// Shield duration (7 s).
pub const SHIELD_TICKS: u32 = 210;

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Rows per tick a player projectile climbs.
pub const PROJECTILE_SPEED: f32 = 1.0;
/// Rows per tick an enemy projectile falls.
pub const ENEMY_PROJECTILE_SPEED: f32 = 0.5;

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Descent speed at level 1.
pub const ENEMY_BASE_SPEED: f32 = 0.12;
/// Descent speed gained per difficulty level.
pub const ENEMY_SPEED_STEP: f32 = 0.02;
/// Per-spawn speed jitter range (multiplier).
pub const ENEMY_SPEED_JITTER_MIN: f32 = 0.8;
pub const ENEMY_SPEED_JITTER_MAX: f32 = 1.2;
/// Bosses descend at this fraction of the current enemy speed.
pub const BOSS_SPEED_FACTOR: f32 = 0.6;
/// Shooting enemies fire every 60..=120 ticks (2–4 s), fixed at spawn.
pub const ENEMY_FIRE_DELAY_MIN: u32 = 60;
pub const ENEMY_FIRE_DELAY_MAX: u32 = 120;
/// Drift pattern: additive horizontal wobble.
pub const DRIFT_WOBBLE_FREQ: f32 = 0.2;
pub const DRIFT_WOBBLE_STEP: f32 = 0.1;
/// Sine pattern: per-instance oscillation parameter ranges.
pub const SINE_AMPLITUDE_MIN: f32 = 4.0;
pub const SINE_AMPLITUDE_MAX: f32 = 12.0;
pub const SINE_FREQUENCY_MIN: f32 = 0.03;
pub const SINE_FREQUENCY_MAX: f32 = 0.09;
/// Bounce pattern: horizontal speed as a fraction of descent speed, and the
/// distance from the field edge at which the velocity sign flips.
pub const BOUNCE_SPEED_FACTOR: f32 = 0.5;
pub const BOUNCE_MARGIN: f32 = 2.0;
/// Ticks an enemy renders white after a non-lethal hit.
pub const DAMAGE_FLASH_TICKS: u32 = 3;

// ── Spawn / difficulty director ──────────────────────────────────────────────

/// Ticks between spawn decisions at level 1 (1 s).
pub const SPAWN_DELAY_START: u32 = 30;
/// Spawn delay lost per difficulty level.
pub const SPAWN_DELAY_STEP: u32 = 2;
/// Spawn delay floor (~500 ms).
pub const SPAWN_DELAY_MIN: u32 = 15;
/// Ticks between difficulty increases (10 s).
pub const DIFFICULTY_TICKS: u32 = 300;
/// Live-enemy cap at game start and its upper bound (raised every 2nd level).
pub const MAX_ENEMIES_START: usize = 5;
pub const MAX_ENEMIES_CAP: usize = 15;
/// Wave-size cap at game start and its upper bound (raised every 3rd level).
pub const WAVE_SIZE_START: u32 = 1;
pub const WAVE_SIZE_CAP: u32 = 4;
/// Delay between members of the same wave (~200 ms).
pub const WAVE_STAGGER_TICKS: u32 = 6;
/// Wave-size distribution tier boundaries (inclusive difficulty levels).
pub const WAVE_TIER_EASY_MAX: u32 = 3;
pub const WAVE_TIER_MID_MAX: u32 = 6;
pub const WAVE_TIER_HARD_MAX: u32 = 10;
/// A boss is due whenever the level is a multiple of this and none is active.
pub const BOSS_LEVEL_INTERVAL: u32 = 5;
/// Difficulty levels at which the shooting and boss type bands unlock.
pub const SHOOTING_UNLOCK_LEVEL: u32 = 3;
pub const BOSS_UNLOCK_LEVEL: u32 = 5;
/// Type-band probabilities, rolled on 0..100.
pub const BOSS_BAND_CHANCE: u32 = 5;
pub const SHOOTING_BAND_CHANCE: u32 = 20;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const SCORE_BOSS: u32 = 50;
pub const SCORE_SHOOTING: u32 = 20;
pub const SCORE_BASIC_DRIFT: u32 = 10;
pub const SCORE_BASIC_OTHER: u32 = 15;
/// Score lost when an enemy escapes off the bottom (clamped at 0 total).
pub const ESCAPE_PENALTY_BASIC: u32 = 1;
pub const ESCAPE_PENALTY_BOSS: u32 = 30;
/// Powerup drop probability per destroyed enemy, by tier.
pub const DROP_CHANCE_BASIC: f64 = 0.05;
pub const DROP_CHANCE_SHOOTING: f64 = 0.15;
pub const DROP_CHANCE_BOSS: f64 = 0.75;

// ── Flow / cosmetics ─────────────────────────────────────────────────────────

/// Pause between the player's death and the game-over screen (2 s).
pub const DEATH_DELAY_TICKS: u32 = 60;
/// Lifetime of an explosion marker (~300 ms).
pub const EXPLOSION_TICKS: u32 = 9;
/// Lifetime of an anchored score/penalty pop (1 s).
pub const NOTICE_TICKS: u32 = 30;
/// Lifetime of a centered banner (level up, boss warning).
pub const BANNER_TICKS: u32 = 45;
/// Ticks the shield renders bright after absorbing a hit.
pub const SHIELD_FLASH_TICKS: u32 = 3;

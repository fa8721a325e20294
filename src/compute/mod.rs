//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG, so a seeded
//! RNG makes whole sessions deterministic.
//!
//! There are no timers or callbacks: every timed behavior is a countdown
//! field decremented once per tick, and every collision is resolved in one
//! pass with at-most-once semantics.

pub mod combat;
pub mod director;

use rand::Rng;

use crate::config;
use crate::entities::{
    EnemyProjectile, GameState, GameStatus, LifeState, MovementPattern, Notice, NoticeKind,
    Player, Projectile,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh game session.  Only the high score carries
/// over from previous sessions.
pub fn new_session(width: u16, height: u16, high_score: u32) -> GameState {
    GameState {
        player: Player::new((width / 2) as i32, height as i32 - 4),
        enemies: Vec::new(),
        projectiles: Vec::new(),
        enemy_projectiles: Vec::new(),
        powerups: Vec::new(),
        explosions: Vec::new(),
        notices: Vec::new(),
        pending_spawns: Vec::new(),
        score: 0,
        high_score,
        level: 1,
        enemy_speed: config::ENEMY_BASE_SPEED,
        spawn_delay: config::SPAWN_DELAY_START,
        spawn_timer: config::SPAWN_DELAY_START,
        difficulty_timer: config::DIFFICULTY_TICKS,
        max_enemies: config::MAX_ENEMIES_START,
        enemies_per_wave: config::WAVE_SIZE_START,
        boss_active: false,
        ships_escaped: 0,
        status: GameStatus::Playing,
        death_timer: 0,
        death_reason: None,
        tick: 0,
        width,
        height,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.x = (next.player.x - config::PLAYER_STEP_X).max(1);
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.x = (next.player.x + config::PLAYER_STEP_X).min(state.width as i32 - 2);
    next
}

pub fn move_player_up(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.player.y = (next.player.y - config::PLAYER_STEP_Y).max(config::PLAY_TOP);
    next
}

pub fn move_player_down(state: &GameState) -> GameState {
    let mut next = state.clone();
    // The ship sprite is two rows tall; keep the wings above the border.
    next.player.y = (next.player.y + config::PLAYER_STEP_Y).min(state.height as i32 - 4);
    next
}

/// Fire a projectile from the player's position.
///
/// A shot needs: game running, fire cooldown expired, weapon not
/// overheated, projectile cap not reached.  Every shot adds heat; the shot
/// that pushes heat to the maximum is swallowed and trips the overheat
/// instead of spawning a projectile.
pub fn player_fire(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.status != GameStatus::Playing {
        return next;
    }
    let p = &mut next.player;
    if p.fire_cooldown > 0 || p.overheated {
        return next;
    }
    if next.projectiles.iter().filter(|b| !b.spent).count() >= p.max_projectiles {
        return next;
    }

    p.fire_cooldown = p.fire_delay;
    p.heat += p.heat_rate;
    if p.heat >= config::HEAT_MAX {
        p.heat = config::HEAT_MAX;
        p.overheated = true;
        p.overheat_timer = config::OVERHEAT_HOLD_TICKS;
        next.notices
            .push(Notice::banner(NoticeKind::Overheat, "WEAPON OVERHEATED!"));
        return next;
    }

    let (px, py) = (next.player.x, next.player.y);
    next.projectiles.push(Projectile {
        x: px as f32,
        y: (py - 1) as f32,
        spent: false,
    });
    next
}

// ── Per-tick update (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.tick += 1;

    advance_cosmetics(&mut next);

    match next.status {
        GameStatus::GameOver => return next,
        GameStatus::Dying => {
            next.death_timer = next.death_timer.saturating_sub(1);
            if next.death_timer == 0 {
                next.status = GameStatus::GameOver;
            }
            return next;
        }
        GameStatus::Playing => {}
    }

    advance_player(&mut next);
    advance_projectiles(&mut next);
    advance_powerups(&mut next);
    advance_enemies(&mut next);
    combat::process_escapes(&mut next);
    director::advance(&mut next, rng);
    combat::resolve(&mut next, rng);
    sweep(&mut next);
    next
}

/// Explosions and notices burn down even while the death delay runs.
fn advance_cosmetics(state: &mut GameState) {
    for e in state.explosions.iter_mut() {
        e.ticks_left = e.ticks_left.saturating_sub(1);
    }
    state.explosions.retain(|e| e.ticks_left > 0);

    for n in state.notices.iter_mut() {
        n.ticks_left = n.ticks_left.saturating_sub(1);
    }
    state.notices.retain(|n| n.ticks_left > 0);
}

fn advance_player(state: &mut GameState) {
    let p = &mut state.player;
    p.fire_cooldown = p.fire_cooldown.saturating_sub(1);
    p.shield_flash = p.shield_flash.saturating_sub(1);

    // Heat: the overheat hold pins it at the maximum, then drops it to the
    // partial-reset level; the weapon only re-enables once fully drained.
    if p.overheat_timer > 0 {
        p.overheat_timer -= 1;
        if p.overheat_timer == 0 {
            p.heat = config::OVERHEAT_RESET_HEAT;
        }
    } else if p.heat > 0.0 {
        p.heat = (p.heat - p.cooling_rate).max(0.0);
        if p.heat <= 0.0 {
            p.heat = 0.0;
            p.overheated = false;
        }
    }

    if p.shield_timer > 0 {
        p.shield_timer -= 1;
        if p.shield_timer == 0 {
            p.shield = false;
        }
    }

    // Faster-firing expiry restores the base firing parameters exactly.
    if p.fast_firing_timer > 0 {
        p.fast_firing_timer -= 1;
        if p.fast_firing_timer == 0 {
            p.fire_delay = p.base_fire_delay;
            p.heat_rate = p.base_heat_rate;
        }
    }
}

fn advance_projectiles(state: &mut GameState) {
    let top = config::PLAY_TOP as f32;
    for b in state.projectiles.iter_mut() {
        b.y -= config::PROJECTILE_SPEED;
    }
    state.projectiles.retain(|b| b.y >= top);

    let bottom = (state.height as i32 - 3) as f32;
    for b in state.enemy_projectiles.iter_mut() {
        b.y += config::ENEMY_PROJECTILE_SPEED;
    }
    state.enemy_projectiles.retain(|b| b.y <= bottom);
}

fn advance_powerups(state: &mut GameState) {
    let bottom = state.bottom() as f32;
    for p in state.powerups.iter_mut() {
        p.y += config::POWERUP_FALL_SPEED;
    }
    // Off-screen powerups vanish without penalty.
    state.powerups.retain(|p| p.y < bottom);
}

fn advance_enemies(state: &mut GameState) {
    let width = state.width as f32;
    let mut shots: Vec<EnemyProjectile> = Vec::new();

    for e in state.enemies.iter_mut() {
        if e.life != LifeState::Active {
            continue;
        }
        e.ticks_alive += 1;
        e.flash = e.flash.saturating_sub(1);
        e.y += e.speed;

        match e.pattern {
            MovementPattern::Drift => {
                e.x += (e.ticks_alive as f32 * config::DRIFT_WOBBLE_FREQ).sin()
                    * config::DRIFT_WOBBLE_STEP;
            }
            MovementPattern::Sine => {
                e.x = e.home_x
                    + (e.ticks_alive as f32 * e.frequency).sin() * e.amplitude;
            }
            MovementPattern::Bounce => {
                if e.x <= config::BOUNCE_MARGIN || e.x >= width - 1.0 - config::BOUNCE_MARGIN {
                    e.vx = -e.vx;
                }
                e.x += e.vx;
            }
        }
        e.x = e.x.clamp(1.0, width - 2.0);

        if e.kind.can_shoot() {
            if e.fire_timer == 0 {
                shots.push(EnemyProjectile {
                    x: e.x,
                    y: e.y + 1.0,
                    spent: false,
                });
                e.fire_timer = e.fire_delay;
            } else {
                e.fire_timer -= 1;
            }
        }
    }

    state.enemy_projectiles.extend(shots);
}

/// Drop everything marked dead during this tick.
fn sweep(state: &mut GameState) {
    state.projectiles.retain(|b| !b.spent);
    state.enemy_projectiles.retain(|b| !b.spent);
    state.powerups.retain(|p| !p.collected);
    state.enemies.retain(|e| e.life == LifeState::Active);
}

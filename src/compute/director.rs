//! Spawn and difficulty director.
//!
//! One countdown drives spawn decisions (boss-or-wave), a second drives
//! difficulty escalation.  Wave members after the first wait in the pending
//! queue so a wave arrives staggered rather than as a single clump.

use rand::Rng;

use crate::config;
use crate::entities::{
    Enemy, EnemyType, GameState, LifeState, MovementPattern, Notice, NoticeKind, PendingSpawn,
};

/// Run the director for one tick: release due wave members, count down to
/// the next spawn decision and the next difficulty step.
pub fn advance(state: &mut GameState, rng: &mut impl Rng) {
    // Release wave members whose stagger has elapsed.
    for p in state.pending_spawns.iter_mut() {
        p.delay = p.delay.saturating_sub(1);
    }
    let due = state
        .pending_spawns
        .iter()
        .filter(|p| p.delay == 0)
        .count();
    state.pending_spawns.retain(|p| p.delay > 0);
    for _ in 0..due {
        spawn_enemy(state, rng);
    }

    state.spawn_timer = state.spawn_timer.saturating_sub(1);
    if state.spawn_timer == 0 {
        state.spawn_timer = state.spawn_delay;
        spawn_wave(state, rng);
    }

    state.difficulty_timer = state.difficulty_timer.saturating_sub(1);
    if state.difficulty_timer == 0 {
        state.difficulty_timer = config::DIFFICULTY_TICKS;
        increase_difficulty(state);
    }
}

/// One spawn decision: skip at the live cap, otherwise a boss when one is
/// due, otherwise a difficulty-sized wave with staggered members.
pub fn spawn_wave(state: &mut GameState, rng: &mut impl Rng) {
    if state.live_enemies() >= state.max_enemies {
        return;
    }

    if state.level % config::BOSS_LEVEL_INTERVAL == 0 && !state.boss_active {
        spawn_boss(state, rng);
        return;
    }

    let size = wave_size(state.level, rng).min(state.enemies_per_wave);
    spawn_enemy(state, rng);
    for i in 1..size {
        state.pending_spawns.push(PendingSpawn {
            delay: i * config::WAVE_STAGGER_TICKS,
        });
    }
}

/// Wave size drawn from the difficulty-tiered distribution (before the
/// per-wave cap is applied).
pub fn wave_size(level: u32, rng: &mut impl Rng) -> u32 {
    let roll: f32 = rng.gen();
    if level <= config::WAVE_TIER_EASY_MAX {
        1
    } else if level <= config::WAVE_TIER_MID_MAX {
        if roll < 0.7 {
            1
        } else {
            2
        }
    } else if level <= config::WAVE_TIER_HARD_MAX {
        if roll < 0.5 {
            1
        } else if roll < 0.8 {
            2
        } else {
            3
        }
    } else if roll < 0.4 {
        2
    } else if roll < 0.7 {
        3
    } else {
        4
    }
}

/// Highest enemy type the current difficulty level can produce.
pub fn max_enemy_type(level: u32) -> u8 {
    (EnemyType::MAX as u32).min(level / 2 + 2) as u8
}

/// Draw an enemy type from the difficulty-gated probability bands: a small
/// boss chance once bosses unlock, a larger shooting chance once shooters
/// unlock, basic otherwise — each band uniform over its level-capped range.
pub fn pick_enemy_type(level: u32, rng: &mut impl Rng) -> EnemyType {
    let max_type = max_enemy_type(level);
    let roll = rng.gen_range(0..100u32);

    if level >= config::BOSS_UNLOCK_LEVEL && roll < config::BOSS_BAND_CHANCE {
        EnemyType(rng.gen_range(6..=max_type.clamp(6, 8)))
    } else if level >= config::SHOOTING_UNLOCK_LEVEL && roll < config::SHOOTING_BAND_CHANCE {
        EnemyType(rng.gen_range(3..=max_type.clamp(3, 5)))
    } else {
        EnemyType(rng.gen_range(0..=max_type.min(2)))
    }
}

/// Spawn one regular enemy at a random column along the top edge.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let x = rng.gen_range(3.0..state.width as f32 - 3.0);
    let speed = state.enemy_speed
        * rng.gen_range(config::ENEMY_SPEED_JITTER_MIN..config::ENEMY_SPEED_JITTER_MAX);
    let kind = pick_enemy_type(state.level, rng);
    let enemy = make_enemy(kind, x, config::PLAY_TOP as f32, speed, rng);
    state.enemies.push(enemy);
}

/// Spawn the level's boss: centered, slower, announced.
pub fn spawn_boss(state: &mut GameState, rng: &mut impl Rng) {
    state.boss_active = true;
    let kind = EnemyType(rng.gen_range(6..=8));
    let x = state.width as f32 / 2.0;
    let speed = state.enemy_speed * config::BOSS_SPEED_FACTOR;
    let enemy = make_enemy(kind, x, config::PLAY_TOP as f32, speed, rng);
    state.enemies.push(enemy);
    state.notices.push(Notice::banner(
        NoticeKind::BossWarning,
        "WARNING: BOSS APPROACHING",
    ));
}

/// Build an enemy of the given type, drawing its per-instance movement and
/// firing parameters.
pub fn make_enemy(kind: EnemyType, x: f32, y: f32, speed: f32, rng: &mut impl Rng) -> Enemy {
    let pattern = kind.pattern();
    let (amplitude, frequency) = if pattern == MovementPattern::Sine {
        (
            rng.gen_range(config::SINE_AMPLITUDE_MIN..config::SINE_AMPLITUDE_MAX),
            rng.gen_range(config::SINE_FREQUENCY_MIN..config::SINE_FREQUENCY_MAX),
        )
    } else {
        (0.0, 0.0)
    };
    let vx = if pattern == MovementPattern::Bounce {
        let dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        dir * speed * config::BOUNCE_SPEED_FACTOR
    } else {
        0.0
    };
    let fire_delay = rng.gen_range(config::ENEMY_FIRE_DELAY_MIN..=config::ENEMY_FIRE_DELAY_MAX);

    Enemy {
        x,
        y,
        kind,
        pattern,
        health: kind.max_health(),
        speed,
        vx,
        home_x: x,
        amplitude,
        frequency,
        fire_delay,
        fire_timer: fire_delay,
        ticks_alive: 0,
        flash: 0,
        life: LifeState::Active,
    }
}

/// One difficulty step: faster enemies, shorter spawn delay (floored), and
/// periodically larger live and per-wave caps (both bounded).
pub fn increase_difficulty(state: &mut GameState) {
    state.level += 1;
    state.enemy_speed += config::ENEMY_SPEED_STEP;
    state.spawn_delay = state
        .spawn_delay
        .saturating_sub(config::SPAWN_DELAY_STEP)
        .max(config::SPAWN_DELAY_MIN);
    // A shortened delay takes effect immediately if the running countdown
    // would outlast it.
    state.spawn_timer = state.spawn_timer.min(state.spawn_delay);

    if state.level % 2 == 0 {
        state.max_enemies = (state.max_enemies + 1).min(config::MAX_ENEMIES_CAP);
    }
    if state.level % 3 == 0 {
        state.enemies_per_wave = (state.enemies_per_wave + 1).min(config::WAVE_SIZE_CAP);
    }

    state.notices.push(Notice::banner(
        NoticeKind::LevelUp,
        format!("LEVEL {}", state.level),
    ));
}

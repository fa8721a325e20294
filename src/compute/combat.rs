//! Collision response: damage, destruction, scoring, escapes, pickups.
//!
//! Every pair is resolved at most once per tick.  Handlers only act on
//! `Active` entities and mark casualties (`spent`, `collected`,
//! `Destroying`/`Destroyed`) instead of removing them mid-pass; the tick's
//! sweep drops them afterwards.

use rand::Rng;

use crate::config;
use crate::entities::{
    DeathReason, Enemy, EnemyTier, EnemyType, Explosion, GameState, GameStatus, LifeState,
    Notice, NoticeKind, Player, Powerup, PowerupKind,
};

/// Resolve all overlaps for this tick, in the order: player projectiles
/// against enemies, enemy fire and enemy bodies against the player, then
/// powerup pickups.
pub fn resolve(state: &mut GameState, rng: &mut impl Rng) {
    resolve_projectile_hits(state, rng);
    resolve_player_hits(state);
    resolve_pickups(state);
}

// ── Projectiles vs enemies ───────────────────────────────────────────────────

fn resolve_projectile_hits(state: &mut GameState, rng: &mut impl Rng) {
    for b in state.projectiles.iter_mut() {
        if b.spent {
            continue;
        }
        let (bx, by) = (b.x.round() as i32, b.y.round() as i32);
        for e in state.enemies.iter_mut() {
            if e.life != LifeState::Active || !enemy_box_contains(e, bx, by) {
                continue;
            }
            // The projectile is gone whether or not the enemy survives, and
            // can never hit a second enemy this tick.
            b.spent = true;
            e.health -= 1;
            if e.health <= 0 {
                e.life = LifeState::Destroying;
                let value = e.kind.score_value();
                state.score += value;
                let (ex, ey) = (e.x.round() as i32, e.y.round() as i32);
                state.explosions.push(Explosion {
                    x: ex,
                    y: ey,
                    ticks_left: config::EXPLOSION_TICKS,
                });
                state
                    .notices
                    .push(Notice::at(NoticeKind::ScorePop, format!("+{value}"), ex, ey));
                if rng.gen_bool(e.kind.drop_chance()) {
                    state.powerups.push(Powerup {
                        x: e.x,
                        y: e.y,
                        kind: PowerupKind::from_index(rng.gen_range(0..4)),
                        collected: false,
                    });
                }
                if e.kind.tier() == EnemyTier::Boss {
                    state.boss_active = false;
                }
            } else {
                e.flash = config::DAMAGE_FLASH_TICKS;
            }
            break;
        }
    }
}

/// Cell-grid bounding box: regular enemies are 3 wide and 2 tall, bosses
/// 5 wide and 3 tall.
fn enemy_box_contains(e: &Enemy, x: i32, y: i32) -> bool {
    let (ex, ey) = (e.x.round() as i32, e.y.round() as i32);
    let (half_w, depth) = match e.kind.tier() {
        EnemyTier::Boss => (2, 2),
        _ => (1, 1),
    };
    (x - ex).abs() <= half_w && y >= ey && y <= ey + depth
}

// ── Enemy fire and bodies vs the player ──────────────────────────────────────

/// The player sprite occupies rows `y..=y+1`, columns `x-1..=x+1`.
fn player_box_contains(px: i32, py: i32, x: i32, y: i32) -> bool {
    (x - px).abs() <= 1 && (y == py || y == py + 1)
}

fn resolve_player_hits(state: &mut GameState) {
    if state.status != GameStatus::Playing {
        return;
    }
    let (px, py) = (state.player.x, state.player.y);
    let mut lethal = false;

    for b in state.enemy_projectiles.iter_mut() {
        if b.spent {
            continue;
        }
        let (bx, by) = (b.x.round() as i32, b.y.round() as i32);
        if !player_box_contains(px, py, bx, by) {
            continue;
        }
        b.spent = true;
        state.explosions.push(Explosion {
            x: bx,
            y: by,
            ticks_left: config::EXPLOSION_TICKS,
        });
        if state.player.shield {
            state.player.shield_flash = config::SHIELD_FLASH_TICKS;
        } else {
            lethal = true;
            break;
        }
    }

    if !lethal {
        for e in state.enemies.iter_mut() {
            if e.life != LifeState::Active || !enemy_overlaps_player(e, px, py) {
                continue;
            }
            // Ramming destroys the enemy either way; no score, no drop.
            e.life = LifeState::Destroying;
            state.explosions.push(Explosion {
                x: e.x.round() as i32,
                y: e.y.round() as i32,
                ticks_left: config::EXPLOSION_TICKS,
            });
            if e.kind.tier() == EnemyTier::Boss {
                state.boss_active = false;
            }
            if state.player.shield {
                state.player.shield_flash = config::SHIELD_FLASH_TICKS;
            } else {
                lethal = true;
                break;
            }
        }
    }

    if lethal {
        kill_player(state);
    }
}

fn enemy_overlaps_player(e: &Enemy, px: i32, py: i32) -> bool {
    let (ex, ey) = (e.x.round() as i32, e.y.round() as i32);
    let (half_w, depth) = match e.kind.tier() {
        EnemyTier::Boss => (2, 2),
        _ => (1, 1),
    };
    // Rectangle intersection in cells; the player is 3 wide and 2 tall.
    (ex - px).abs() <= half_w + 1 && ey <= py + 1 && ey + depth >= py
}

/// Terminal transition: mark the session as dying and lock in the high
/// score immediately.
pub fn kill_player(state: &mut GameState) {
    state.explosions.push(Explosion {
        x: state.player.x,
        y: state.player.y,
        ticks_left: config::EXPLOSION_TICKS,
    });
    state.status = GameStatus::Dying;
    state.death_timer = config::DEATH_DELAY_TICKS;
    state.death_reason = Some(DeathReason::ShipDestroyed);
    if state.score > state.high_score {
        state.high_score = state.score;
    }
}

// ── Escapes ──────────────────────────────────────────────────────────────────

/// An enemy at or past the bottom boundary has escaped: count it, dock the
/// score (clamped at zero) and remove it without effects.  A boss escape
/// also frees the boss slot and raises a banner.  Escapes never end the
/// game.
pub fn process_escapes(state: &mut GameState) {
    let bottom = state.bottom();
    let bottom_f = bottom as f32;
    let mut escaped: Vec<(f32, EnemyType)> = Vec::new();

    for e in state.enemies.iter_mut() {
        if e.life == LifeState::Active && e.y >= bottom_f {
            e.life = LifeState::Destroyed;
            escaped.push((e.x, e.kind));
        }
    }

    for (x, kind) in escaped {
        state.ships_escaped += 1;
        let penalty = kind.escape_penalty();
        state.score = state.score.saturating_sub(penalty);
        state.notices.push(Notice::at(
            NoticeKind::Penalty,
            format!("-{penalty}"),
            x.round() as i32,
            bottom - 1,
        ));
        if kind.tier() == EnemyTier::Boss {
            state.boss_active = false;
            state
                .notices
                .push(Notice::banner(NoticeKind::BossEscaped, "BOSS ESCAPED!"));
        }
    }
}

// ── Powerup pickups ──────────────────────────────────────────────────────────

fn resolve_pickups(state: &mut GameState) {
    let (px, py) = (state.player.x, state.player.y);
    let mut collected: Vec<PowerupKind> = Vec::new();

    for p in state.powerups.iter_mut() {
        if p.collected {
            continue;
        }
        if player_box_contains(px, py, p.x.round() as i32, p.y.round() as i32) {
            p.collected = true;
            collected.push(p.kind);
        }
    }

    for kind in collected {
        apply_powerup(&mut state.player, kind);
        state
            .notices
            .push(Notice::banner(NoticeKind::PowerupPickup, kind.label()));
    }
}

/// Apply a powerup to the player.  Repeat pickups of the same kind compound
/// onto the already-modified values; only the faster-firing effect is
/// time-boxed, and its expiry snaps back to the base values.
pub fn apply_powerup(player: &mut Player, kind: PowerupKind) {
    match kind {
        PowerupKind::ExtraProjectile => {
            player.max_projectiles =
                (player.max_projectiles + 1).min(config::PLAYER_PROJECTILE_CAP);
        }
        PowerupKind::FasterFiring => {
            player.fire_delay = ((player.fire_delay as f32 * config::FAST_FIRING_FACTOR) as u32)
                .max(config::PLAYER_MIN_FIRE_DELAY);
            player.heat_rate =
                (player.heat_rate * config::FAST_FIRING_FACTOR).max(config::HEAT_RATE_FLOOR);
            player.fast_firing_timer = config::FAST_FIRING_TICKS;
        }
        PowerupKind::RapidCooling => {
            player.heat_rate =
                (player.heat_rate * config::RAPID_COOLING_HEAT_FACTOR).max(config::HEAT_RATE_FLOOR);
            player.cooling_rate *= config::RAPID_COOLING_BOOST;
            player.cooling_upgraded = true;
        }
        PowerupKind::Shield => {
            player.shield = true;
            player.shield_timer = config::SHIELD_TICKS;
        }
    }
}

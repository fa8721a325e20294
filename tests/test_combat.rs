use retro_shooter::compute::combat::{process_escapes, resolve};
use retro_shooter::compute::{new_session, tick};
use retro_shooter::entities::*;
use retro_shooter::store::HighScoreStore;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    new_session(40, 20, 0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_enemy(kind: u8, x: f32, y: f32) -> Enemy {
    let kind = EnemyType(kind);
    Enemy {
        x,
        y,
        kind,
        pattern: kind.pattern(),
        health: kind.max_health(),
        speed: 0.12,
        vx: 0.0,
        home_x: x,
        amplitude: 0.0,
        frequency: 0.0,
        fire_delay: 90,
        fire_timer: 90,
        ticks_alive: 0,
        flash: 0,
        life: LifeState::Active,
    }
}

fn shot_at(x: f32, y: f32) -> Projectile {
    Projectile { x, y, spent: false }
}

fn enemy_shot_at(x: f32, y: f32) -> EnemyProjectile {
    EnemyProjectile { x, y, spent: false }
}

// ── Projectile vs enemy ───────────────────────────────────────────────────────

#[test]
fn projectile_destroys_basic_enemy_and_scores() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 5.0));
    s.projectiles.push(shot_at(10.0, 5.0));
    resolve(&mut s, &mut seeded_rng());

    assert!(s.projectiles[0].spent);
    assert_eq!(s.enemies[0].life, LifeState::Destroying);
    assert_eq!(s.score, 10);
    assert!(!s.explosions.is_empty());
    assert!(s
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::ScorePop && n.text == "+10"));
}

#[test]
fn projectile_is_spent_even_on_a_surviving_enemy() {
    let mut s = make_state();
    s.enemies.push(make_enemy(7, 10.0, 5.0)); // 3 health
    s.projectiles.push(shot_at(10.0, 5.0));
    resolve(&mut s, &mut seeded_rng());

    assert!(s.projectiles[0].spent);
    let e = &s.enemies[0];
    assert_eq!(e.life, LifeState::Active);
    assert_eq!(e.health, 2);
    assert!(e.flash > 0);
    assert_eq!(s.score, 0); // no score until destroyed
}

#[test]
fn boss_falls_after_three_hits_for_fifty_points() {
    let mut s = make_state();
    s.boss_active = true;
    s.enemies.push(make_enemy(7, 10.0, 5.0));
    let mut rng = seeded_rng();

    for hit in 1..=3 {
        s.projectiles.clear();
        s.projectiles.push(shot_at(10.0, 5.0));
        resolve(&mut s, &mut rng);
        if hit < 3 {
            assert_eq!(s.enemies[0].life, LifeState::Active, "hit {hit}");
        }
    }

    assert_eq!(s.enemies[0].life, LifeState::Destroying);
    assert_eq!(s.score, 50);
    assert!(!s.boss_active); // slot freed exactly once, at death
}

#[test]
fn spent_projectile_cannot_hit_a_second_enemy() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 5.0));
    s.enemies.push(make_enemy(0, 10.0, 5.0)); // stacked on the same cell
    s.projectiles.push(shot_at(10.0, 5.0));
    resolve(&mut s, &mut seeded_rng());

    let destroyed = s
        .enemies
        .iter()
        .filter(|e| e.life == LifeState::Destroying)
        .count();
    assert_eq!(destroyed, 1);
    assert_eq!(s.score, 10); // scored once, not twice
}

#[test]
fn already_spent_projectiles_are_ignored() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 5.0));
    let mut b = shot_at(10.0, 5.0);
    b.spent = true;
    s.projectiles.push(b);
    resolve(&mut s, &mut seeded_rng());
    assert_eq!(s.enemies[0].life, LifeState::Active);
}

#[test]
fn misses_outside_the_bounding_box() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 5.0));
    s.projectiles.push(shot_at(12.0, 5.0)); // two columns off a 3-wide box
    resolve(&mut s, &mut seeded_rng());
    assert_eq!(s.enemies[0].life, LifeState::Active);
    assert!(!s.projectiles[0].spent);
}

#[test]
fn boss_hit_box_is_wider() {
    let mut s = make_state();
    s.enemies.push(make_enemy(6, 10.0, 5.0));
    s.projectiles.push(shot_at(12.0, 7.0)); // corner of the 5x3 box
    resolve(&mut s, &mut seeded_rng());
    assert_eq!(s.enemies[0].health, 2);
}

// ── Player hits ───────────────────────────────────────────────────────────────

#[test]
fn enemy_projectile_kills_an_unshielded_player() {
    let mut s = make_state();
    s.score = 5;
    s.enemy_projectiles.push(enemy_shot_at(20.0, 16.0));
    resolve(&mut s, &mut seeded_rng());

    assert_eq!(s.status, GameStatus::Dying);
    assert_eq!(s.death_timer, 60);
    assert_eq!(s.death_reason, Some(DeathReason::ShipDestroyed));
    assert_eq!(s.high_score, 5); // locked in at death time
    assert!(s.enemy_projectiles[0].spent);
}

#[test]
fn shield_absorbs_the_hit_and_play_continues() {
    let mut s = make_state();
    s.player.shield = true;
    s.player.shield_timer = 100;
    s.enemy_projectiles.push(enemy_shot_at(20.0, 16.0));
    resolve(&mut s, &mut seeded_rng());

    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.enemy_projectiles[0].spent); // attacker destroyed
    assert!(s.player.shield_flash > 0);
    assert!(s.player.shield); // shield persists for its full duration
}

#[test]
fn ramming_enemy_dies_and_kills_an_unshielded_player() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 20.0, 16.0));
    resolve(&mut s, &mut seeded_rng());

    assert_eq!(s.status, GameStatus::Dying);
    assert_eq!(s.enemies[0].life, LifeState::Destroying);
}

#[test]
fn shielded_ram_destroys_the_attacker_only() {
    let mut s = make_state();
    s.player.shield = true;
    s.player.shield_timer = 100;
    s.boss_active = true;
    s.enemies.push(make_enemy(6, 20.0, 16.0));
    resolve(&mut s, &mut seeded_rng());

    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.enemies[0].life, LifeState::Destroying);
    assert!(!s.boss_active); // a boss dying to a ram still frees the slot
}

#[test]
fn death_delay_leads_to_game_over() {
    let mut s = make_state();
    s.enemy_projectiles.push(enemy_shot_at(20.0, 16.0));
    resolve(&mut s, &mut seeded_rng());
    assert_eq!(s.status, GameStatus::Dying);

    let mut state = s;
    let mut rng = seeded_rng();
    for _ in 0..59 {
        state = tick(&state, &mut rng);
        assert_eq!(state.status, GameStatus::Dying);
    }
    state = tick(&state, &mut rng);
    assert_eq!(state.status, GameStatus::GameOver);
}

// ── Powerup pickups ───────────────────────────────────────────────────────────

#[test]
fn pickup_applies_effect_and_announces_it() {
    let mut s = make_state();
    s.powerups.push(Powerup {
        x: 20.0,
        y: 16.0,
        kind: PowerupKind::Shield,
        collected: false,
    });
    resolve(&mut s, &mut seeded_rng());

    assert!(s.powerups[0].collected);
    assert!(s.player.shield);
    assert_eq!(s.player.shield_timer, 210);
    assert!(s
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::PowerupPickup && n.text == "SHIELD"));
}

#[test]
fn pickup_through_tick_sweeps_the_powerup() {
    let mut s = make_state();
    s.powerups.push(Powerup {
        x: 20.0,
        y: 15.8, // falls into the player's cells this tick
        kind: PowerupKind::ExtraProjectile,
        collected: false,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert!(s2.powerups.is_empty());
    assert_eq!(s2.player.max_projectiles, 4);
}

// ── Escapes ───────────────────────────────────────────────────────────────────

#[test]
fn basic_escape_penalizes_one_point_with_a_floor_at_zero() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 18.0));
    process_escapes(&mut s);

    assert_eq!(s.ships_escaped, 1);
    assert_eq!(s.score, 0); // 0 - 1 clamps at 0
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.enemies[0].life, LifeState::Destroyed);

    let mut s2 = make_state();
    s2.score = 5;
    s2.enemies.push(make_enemy(3, 10.0, 18.0));
    process_escapes(&mut s2);
    assert_eq!(s2.score, 4);
}

#[test]
fn boss_escape_costs_thirty_and_frees_the_slot() {
    let mut s = make_state();
    s.score = 10;
    s.boss_active = true;
    s.enemies.push(make_enemy(6, 10.0, 18.0));
    process_escapes(&mut s);

    assert_eq!(s.ships_escaped, 1);
    assert_eq!(s.score, 0); // 10 - 30 clamps at 0
    assert!(!s.boss_active);
    assert!(s
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::BossEscaped));
}

#[test]
fn escape_through_tick_removes_the_enemy_and_play_continues() {
    let mut s = make_state();
    s.enemies.push(make_enemy(0, 10.0, 17.95));
    let s2 = tick(&s, &mut seeded_rng());

    assert_eq!(s2.ships_escaped, 1);
    assert!(s2.enemies.is_empty()); // swept after marking
    assert_eq!(s2.status, GameStatus::Playing);
}

#[test]
fn escapes_only_count_living_enemies() {
    let mut s = make_state();
    let mut e = make_enemy(0, 10.0, 18.0);
    e.life = LifeState::Destroying;
    s.enemies.push(e);
    process_escapes(&mut s);
    assert_eq!(s.ships_escaped, 0);
}

// ── High-score store ──────────────────────────────────────────────────────────

#[test]
fn store_round_trips_through_its_file() {
    let path = std::env::temp_dir().join("retro_shooter_test_roundtrip");
    let store = HighScoreStore::new(path.clone());
    store.save(1234).unwrap();
    assert_eq!(store.load(), 1234);
    let _ = std::fs::remove_file(path);
}

#[test]
fn store_reads_missing_file_as_zero() {
    let store = HighScoreStore::new(std::env::temp_dir().join("retro_shooter_test_absent"));
    assert_eq!(store.load(), 0);
}

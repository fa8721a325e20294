use retro_shooter::compute::director::*;
use retro_shooter::compute::{new_session, tick};
use retro_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    new_session(40, 20, 0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Type selection ────────────────────────────────────────────────────────────

#[test]
fn max_type_follows_level_curve() {
    assert_eq!(max_enemy_type(1), 2);
    assert_eq!(max_enemy_type(4), 4);
    assert_eq!(max_enemy_type(7), 5);
    assert_eq!(max_enemy_type(12), 8);
    assert_eq!(max_enemy_type(100), 8);
}

#[test]
fn max_type_is_monotonic_in_level() {
    let mut prev = 0;
    for level in 1..=40 {
        let m = max_enemy_type(level);
        assert!(m >= prev, "level {level}");
        prev = m;
    }
}

#[test]
fn level_one_draws_only_basic_types() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let t = pick_enemy_type(1, &mut rng);
        assert!(t.0 <= 2, "drew type {} at level 1", t.0);
    }
}

#[test]
fn shooters_unlock_at_level_three() {
    let mut rng = seeded_rng();
    let mut saw_shooter = false;
    for _ in 0..500 {
        let t = pick_enemy_type(3, &mut rng);
        assert!(t.0 <= 5, "bosses must stay locked at level 3");
        saw_shooter |= t.can_shoot();
    }
    assert!(saw_shooter);
}

#[test]
fn bosses_never_drop_before_level_five() {
    let mut rng = seeded_rng();
    for level in 1..=4 {
        for _ in 0..200 {
            assert!(pick_enemy_type(level, &mut rng).0 < 6, "level {level}");
        }
    }
}

#[test]
fn bosses_appear_from_level_five() {
    let mut rng = seeded_rng();
    let mut saw_boss = false;
    for _ in 0..1000 {
        let t = pick_enemy_type(5, &mut rng);
        saw_boss |= t.tier() == EnemyTier::Boss;
    }
    assert!(saw_boss);
}

#[test]
fn drawn_types_respect_the_level_cap() {
    let mut rng = seeded_rng();
    for level in 1..=12 {
        let cap = max_enemy_type(level).max(6); // boss band bottoms out at 6
        for _ in 0..200 {
            let t = pick_enemy_type(level, &mut rng);
            assert!(t.0 <= cap, "level {level} drew type {}", t.0);
        }
    }
}

// ── Wave sizing ───────────────────────────────────────────────────────────────

#[test]
fn wave_sizes_stay_within_their_tier_ranges() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        assert_eq!(wave_size(2, &mut rng), 1);
        assert!((1..=2).contains(&wave_size(5, &mut rng)));
        assert!((1..=3).contains(&wave_size(8, &mut rng)));
        assert!((2..=4).contains(&wave_size(12, &mut rng)));
    }
}

// ── Spawn decisions ───────────────────────────────────────────────────────────

#[test]
fn boss_level_spawns_exactly_one_boss() {
    let mut s = make_state();
    s.level = 5;
    spawn_wave(&mut s, &mut seeded_rng());
    assert_eq!(s.enemies.len(), 1);
    assert!(s.enemies[0].kind.0 >= 6 && s.enemies[0].kind.0 <= 8);
    assert!(s.boss_active);
    assert!(s.pending_spawns.is_empty());
    assert!(s
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::BossWarning));
}

#[test]
fn no_second_boss_while_one_is_active() {
    let mut s = make_state();
    s.level = 5;
    s.boss_active = true;
    spawn_wave(&mut s, &mut seeded_rng());
    // Falls through to a regular wave instead of another boss spawn
    assert!(!s.enemies.is_empty());
    assert!(s.boss_active);
    assert!(s
        .notices
        .iter()
        .all(|n| n.kind != NoticeKind::BossWarning));
}

#[test]
fn spawning_skipped_at_the_live_cap() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..s.max_enemies {
        spawn_enemy(&mut s, &mut rng);
    }
    let before = s.enemies.len();
    spawn_wave(&mut s, &mut rng);
    assert_eq!(s.enemies.len(), before);
    assert!(s.pending_spawns.is_empty());
}

#[test]
fn wave_members_after_the_first_are_staggered() {
    let mut s = make_state();
    s.level = 12;
    s.enemies_per_wave = 4;
    spawn_wave(&mut s, &mut seeded_rng());
    // Level 12 waves are always at least two strong
    assert_eq!(s.enemies.len(), 1);
    assert!(!s.pending_spawns.is_empty());
    for (i, p) in s.pending_spawns.iter().enumerate() {
        assert_eq!(p.delay, (i as u32 + 1) * 6);
    }
}

#[test]
fn pending_spawns_release_when_their_delay_elapses() {
    let mut s = make_state();
    s.spawn_timer = 10_000; // keep the spawn decision out of the way
    s.difficulty_timer = 10_000;
    s.pending_spawns.push(PendingSpawn { delay: 2 });
    let mut rng = seeded_rng();

    advance(&mut s, &mut rng);
    assert!(s.enemies.is_empty());
    assert_eq!(s.pending_spawns.len(), 1);

    advance(&mut s, &mut rng);
    assert_eq!(s.enemies.len(), 1);
    assert!(s.pending_spawns.is_empty());
}

#[test]
fn spawned_enemies_start_along_the_top_edge() {
    let mut s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..50 {
        s.enemies.clear();
        spawn_enemy(&mut s, &mut rng);
        let e = &s.enemies[0];
        assert_eq!(e.y, 2.0);
        assert!(e.x >= 3.0 && e.x <= 37.0);
        assert!(e.speed >= 0.12 * 0.8 && e.speed <= 0.12 * 1.2);
        assert_eq!(e.health, e.kind.max_health());
    }
}

// ── Difficulty escalation ─────────────────────────────────────────────────────

#[test]
fn difficulty_step_raises_speed_and_shortens_delay() {
    let mut s = make_state();
    increase_difficulty(&mut s);
    assert_eq!(s.level, 2);
    assert!((s.enemy_speed - 0.14).abs() < 1e-4);
    assert_eq!(s.spawn_delay, 28);
    assert_eq!(s.max_enemies, 6); // every 2nd level
    assert_eq!(s.enemies_per_wave, 1); // not a 3rd level yet

    increase_difficulty(&mut s);
    assert_eq!(s.level, 3);
    assert_eq!(s.max_enemies, 6);
    assert_eq!(s.enemies_per_wave, 2); // every 3rd level
}

#[test]
fn spawn_delay_floors_and_caps_hold() {
    let mut s = make_state();
    for _ in 0..60 {
        increase_difficulty(&mut s);
    }
    assert_eq!(s.spawn_delay, 15);
    assert_eq!(s.max_enemies, 15);
    assert_eq!(s.enemies_per_wave, 4);
}

#[test]
fn difficulty_step_announces_the_new_level() {
    let mut s = make_state();
    increase_difficulty(&mut s);
    assert!(s
        .notices
        .iter()
        .any(|n| n.kind == NoticeKind::LevelUp && n.text == "LEVEL 2"));
}

// ── Through the public tick ───────────────────────────────────────────────────

#[test]
fn spawn_decision_fires_through_tick() {
    let mut s = make_state();
    s.spawn_timer = 1;
    let s2 = tick(&s, &mut seeded_rng());
    // Level 1 waves are always singletons
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.spawn_timer, s2.spawn_delay); // countdown reloaded
}

#[test]
fn boss_due_at_level_five_through_tick() {
    let mut s = make_state();
    s.level = 5;
    s.spawn_timer = 1;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies.len(), 1);
    assert_eq!(s2.enemies[0].kind.tier(), EnemyTier::Boss);
    assert!(s2.boss_active);
}

#[test]
fn difficulty_timer_fires_through_tick() {
    let mut s = make_state();
    s.difficulty_timer = 1;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.level, 2);
    assert_eq!(s2.difficulty_timer, 300);
}

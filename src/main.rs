use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use retro_shooter::compute::{
    move_player_down, move_player_left, move_player_right, move_player_up, new_session,
    player_fire, tick,
};
use retro_shooter::display::{self, Starfield};
use retro_shooter::entities::{DeathReason, GameStatus};
use retro_shooter::store::HighScoreStore;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between player movement steps while a direction key is held.
const MOVE_COOLDOWN: u32 = 2;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Length of the warp interlude between the title screen and the game.
const WARP_FRAMES: u32 = 90;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

// ── Scene flow ────────────────────────────────────────────────────────────────

/// Boot is the terminal bring-up in `main`; everything after it cycles
/// through this controller.
enum Scene {
    Title,
    Transition,
    Game,
    GameOver { score: u32, reason: DeathReason },
}

/// A quit request, honored from any scene.
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

// ── Title scene ───────────────────────────────────────────────────────────────

fn title_scene<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: u32,
) -> std::io::Result<Option<Scene>> {
    let (width, height) = terminal::size()?;
    let mut rng = thread_rng();
    let mut stars = Starfield::new(width, height, &mut rng);

    loop {
        let frame_start = Instant::now();

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_key(code, modifiers) {
                return Ok(None);
            }
            if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                return Ok(Some(Scene::Transition));
            }
        }

        stars.advance(&mut rng, 1.0);
        display::menus::render_title(out, width, height, &stars, high_score)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Warp transition ───────────────────────────────────────────────────────────

fn transition_scene<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<Option<Scene>> {
    let (width, height) = terminal::size()?;
    let mut rng = thread_rng();
    let mut stars = Starfield::new(width, height, &mut rng);

    for t in 0..WARP_FRAMES {
        let frame_start = Instant::now();

        // Any key skips straight into the game.
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_key(code, modifiers) {
                return Ok(None);
            }
            return Ok(Some(Scene::Game));
        }

        // Stars accelerate to warp speed over the sequence.
        let factor = 1.0 + (t as f32 / WARP_FRAMES as f32) * 14.0;
        stars.advance(&mut rng, factor);
        display::transition::render(out, width, height, &stars, t, WARP_FRAMES)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
    Ok(Some(Scene::Game))
}

// ── Game scene ────────────────────────────────────────────────────────────────

/// Runs one game session to its end.
///
/// Input model: instead of acting on each key event individually, we
/// maintain a `key_frame` map that records the frame number of the last
/// press/repeat event for every key.  Each frame we check which keys are
/// still "fresh" (within `HOLD_WINDOW` frames) and apply all their effects
/// simultaneously, so moving and shooting don't interfere.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames
///   of silence, which is shorter than the OS repeat interval, so the key
///   stays live while it is actively generating repeats.
fn game_scene<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    high_score: &mut u32,
    store: &HighScoreStore,
) -> std::io::Result<Option<Scene>> {
    let (width, height) = terminal::size()?;
    let mut rng = thread_rng();
    let mut state = new_session(width, height, *high_score);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut move_cooldown: u32 = 0;
    let mut frame: u64 = 0;

    const LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
    const RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
    const UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
    const DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    if is_quit_key(code, modifiers) {
                        return Ok(None);
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Apply held-key actions every frame ────────────────────────────────
        if state.status == GameStatus::Playing {
            let left = any_held(&key_frame, LEFT, frame);
            let right = any_held(&key_frame, RIGHT, frame);
            let up = any_held(&key_frame, UP, frame);
            let down = any_held(&key_frame, DOWN, frame);

            // Movement — throttled so the ship doesn't teleport
            if move_cooldown == 0 && (left || right || up || down) {
                if left {
                    state = move_player_left(&state);
                } else if right {
                    state = move_player_right(&state);
                }
                if up {
                    state = move_player_up(&state);
                } else if down {
                    state = move_player_down(&state);
                }
                move_cooldown = MOVE_COOLDOWN;
            }

            // Firing needs no input-side throttle: the simulation's fire
            // cooldown and heat model gate it.
            if is_held(&key_frame, &KeyCode::Char(' '), frame) {
                state = player_fire(&state);
            }
        }

        move_cooldown = move_cooldown.saturating_sub(1);

        state = tick(&state, &mut rng);
        display::game::render(out, &state)?;

        if state.status == GameStatus::GameOver {
            // The simulation locked in the high score at death time.
            if state.high_score > *high_score {
                *high_score = state.high_score;
                let _ = store.save(*high_score);
            }
            let reason = state.death_reason.unwrap_or(DeathReason::ShipDestroyed);
            return Ok(Some(Scene::GameOver {
                score: state.score,
                reason,
            }));
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Game-over scene ───────────────────────────────────────────────────────────

fn game_over_scene<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    score: u32,
    high_score: u32,
    reason: DeathReason,
) -> std::io::Result<Option<Scene>> {
    let (width, height) = terminal::size()?;
    let mut rng = thread_rng();
    let mut stars = Starfield::new(width, height, &mut rng);

    loop {
        let frame_start = Instant::now();

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_key(code, modifiers) {
                return Ok(None);
            }
            match code {
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                    return Ok(Some(Scene::Game));
                }
                KeyCode::Char('m') | KeyCode::Char('M') => {
                    return Ok(Some(Scene::Title));
                }
                _ => {}
            }
        }

        stars.advance(&mut rng, 1.0);
        display::menus::render_game_over(out, width, height, &stars, score, high_score, reason)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the scene loops never have to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let store = HighScoreStore::default_location();
    let mut high_score = store.load();
    let mut scene = Scene::Title;

    loop {
        let next = match scene {
            Scene::Title => title_scene(out, rx, high_score)?,
            Scene::Transition => transition_scene(out, rx)?,
            Scene::Game => game_scene(out, rx, &mut high_score, &store)?,
            Scene::GameOver { score, reason } => {
                game_over_scene(out, rx, score, high_score, reason)?
            }
        };
        match next {
            Some(s) => scene = s,
            None => break,
        }
    }
    Ok(())
}

//! In-game frame rendering: border, HUD, entities, overlays.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config;
use crate::entities::{
    Enemy, EnemyTier, GameState, GameStatus, MovementPattern, Notice, NoticeAnchor, NoticeKind,
    PowerupKind,
};

use super::{
    print_centered, C_BASIC_BOUNCE, C_BASIC_DRIFT, C_BASIC_SINE, C_BORDER, C_BOSS,
    C_BULLET_ENEMY, C_BULLET_PLAYER, C_ESCAPED, C_HINT, C_HUD_SCORE, C_HUD_TEXT, C_PLAYER,
    C_SHIELD, C_SHOOTING,
};

/// Render one complete frame of the game scene.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, state)?;
    draw_hud(out, state)?;

    for powerup in &state.powerups {
        draw_powerup(out, powerup)?;
    }
    for enemy in &state.enemies {
        draw_enemy(out, enemy, state)?;
    }
    for bullet in &state.projectiles {
        draw_cell(out, bullet.x, bullet.y, C_BULLET_PLAYER, "║")?;
    }
    for bullet in &state.enemy_projectiles {
        draw_cell(out, bullet.x, bullet.y, C_BULLET_ENEMY, "↓")?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, explosion)?;
    }

    if state.status == GameStatus::Playing {
        draw_player(out, state)?;
    }

    for notice in &state.notices {
        draw_notice(out, state, notice)?;
    }

    draw_status_row(out, state)?;

    if state.status == GameStatus::Dying {
        print_centered(
            out,
            state.width,
            state.height / 2,
            Color::Red,
            "YOUR SHIP WAS DESTROYED",
        )?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, state.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Queue a one-cell glyph, skipping anything outside the play area.
fn draw_cell<W: Write>(
    out: &mut W,
    x: f32,
    y: f32,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let (cx, cy) = (x.round() as i32, y.round() as i32);
    if cx >= 0 && cy >= 0 {
        out.queue(cursor::MoveTo(cx as u16, cy as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let w = state.width as usize;
    let h = state.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(state.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE: {:>6}", state.score)))?;

    let level_str = format!("LEVEL: {}", state.level);
    let lx = (state.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TEXT))?;
    out.queue(Print(&level_str))?;

    let escaped_str = format!("ESCAPED: {}", state.ships_escaped);
    let hi_str = format!("HI: {:>6}", state.high_score);
    let rx = state
        .width
        .saturating_sub((escaped_str.len() + hi_str.len() + 3) as u16);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&hi_str))?;
    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(C_ESCAPED))?;
    out.queue(Print(&escaped_str))?;

    Ok(())
}

// ── Status row (last row): heat gauge + powerup indicators ───────────────────

fn heat_color(ratio: f32) -> Color {
    if ratio < 0.5 {
        Color::Cyan
    } else if ratio < 0.8 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_status_row<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let row = state.height.saturating_sub(1);
    let p = &state.player;

    let ratio = p.heat / config::HEAT_MAX;
    let filled = (ratio * 10.0).round() as usize;
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("HEAT ["))?;
    out.queue(style::SetForegroundColor(heat_color(ratio)))?;
    out.queue(Print("█".repeat(filled.min(10))))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("░".repeat(10usize.saturating_sub(filled))))?;
    out.queue(Print("]"))?;

    if p.overheated {
        // Blink so the lockout is unmissable.
        if (state.tick / 4) % 2 == 0 {
            out.queue(style::SetForegroundColor(Color::Red))?;
            out.queue(Print(" OVERHEAT!"))?;
        }
    }

    let mut col = state.width.saturating_sub(20);
    if p.max_projectiles > p.base_max_projectiles {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(Color::Cyan))?;
        out.queue(Print(format!("x{}", p.max_projectiles)))?;
        col += 4;
    }
    if p.fast_firing_timer > 0 {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print("FAST"))?;
        col += 5;
    }
    if p.cooling_upgraded {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(Color::Green))?;
        out.queue(Print("COOL"))?;
        col += 5;
    }
    if p.shield {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(C_SHIELD))?;
        out.queue(Print(format!("SHD {}", p.shield_timer / config::TICKS_PER_SEC + 1)))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← row y      (tip)
    //  /|\      ← row y+1    (wings + fuselage)
    let p = &state.player;
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(p.x as u16, p.y as u16))?;
    out.queue(Print("▲"))?;

    let wing_y = p.y + 1;
    if wing_y < state.height as i32 - 2 {
        out.queue(cursor::MoveTo((p.x - 1).max(1) as u16, wing_y as u16))?;
        out.queue(Print("/|\\"))?;
    }

    if p.shield {
        let color = if p.shield_flash > 0 { Color::White } else { C_SHIELD };
        out.queue(style::SetForegroundColor(color))?;
        out.queue(cursor::MoveTo((p.x - 2).max(1) as u16, p.y as u16))?;
        out.queue(Print("("))?;
        out.queue(cursor::MoveTo((p.x + 2).max(1) as u16, p.y as u16))?;
        out.queue(Print(")"))?;
    }

    Ok(())
}

fn enemy_color(enemy: &Enemy) -> Color {
    if enemy.flash > 0 {
        return Color::White;
    }
    match enemy.kind.tier() {
        EnemyTier::Boss => C_BOSS,
        EnemyTier::Shooting => C_SHOOTING,
        EnemyTier::Basic => match enemy.pattern {
            MovementPattern::Drift => C_BASIC_DRIFT,
            MovementPattern::Sine => C_BASIC_SINE,
            MovementPattern::Bounce => C_BASIC_BOUNCE,
        },
    }
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, state: &GameState) -> std::io::Result<()> {
    let play_bottom = state.height as i32 - 2;
    let (ex, ey) = (enemy.x.round() as i32, enemy.y.round() as i32);
    out.queue(style::SetForegroundColor(enemy_color(enemy)))?;

    match enemy.kind.tier() {
        EnemyTier::Boss => {
            // 5 cols, 3 rows, health bar floating above
            let lx = (ex - 2).max(1) as u16;
            let rows: [&str; 3] = ["<[◉]>", "{===}", " \\_/ "];
            for (i, sprite) in rows.iter().enumerate() {
                let row = ey + i as i32;
                if row >= 2 && row < play_bottom {
                    out.queue(cursor::MoveTo(lx, row as u16))?;
                    out.queue(Print(*sprite))?;
                }
            }
            draw_boss_health_bar(out, enemy, ey - 1)?;
        }
        EnemyTier::Shooting => {
            let lx = (ex - 1).max(1) as u16;
            if ey >= 2 && ey < play_bottom {
                out.queue(cursor::MoveTo(lx, ey as u16))?;
                out.queue(Print("(◉)"))?;
            }
            if ey + 1 >= 2 && ey + 1 < play_bottom {
                out.queue(cursor::MoveTo(lx, (ey + 1) as u16))?;
                out.queue(Print("\\-/"))?;
            }
        }
        EnemyTier::Basic => {
            let lx = (ex - 1).max(1) as u16;
            if ey >= 2 && ey < play_bottom {
                out.queue(cursor::MoveTo(lx, ey as u16))?;
                out.queue(Print("<▼>"))?;
            }
            if ey + 1 >= 2 && ey + 1 < play_bottom {
                out.queue(cursor::MoveTo(lx, (ey + 1) as u16))?;
                out.queue(Print("[_]"))?;
            }
        }
    }
    Ok(())
}

fn draw_boss_health_bar<W: Write>(out: &mut W, enemy: &Enemy, row: i32) -> std::io::Result<()> {
    if row < 2 {
        return Ok(());
    }
    let pct = enemy.health_percent();
    let filled = (pct * 5.0).round() as usize;
    let color = if pct > 0.67 {
        Color::Green
    } else if pct > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };
    let lx = (enemy.x.round() as i32 - 2).max(1) as u16;
    out.queue(cursor::MoveTo(lx, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print("▂".repeat(filled.min(5))))?;
    Ok(())
}

fn draw_powerup<W: Write>(
    out: &mut W,
    powerup: &crate::entities::Powerup,
) -> std::io::Result<()> {
    let (glyph, color) = match powerup.kind {
        PowerupKind::ExtraProjectile => ("+", Color::Cyan),
        PowerupKind::FasterFiring => ("»", Color::Yellow),
        PowerupKind::RapidCooling => ("*", Color::Green),
        PowerupKind::Shield => ("O", C_SHIELD),
    };
    draw_cell(out, powerup.x, powerup.y, color, glyph)
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &crate::entities::Explosion,
) -> std::io::Result<()> {
    let (glyph, color) = if explosion.ticks_left > 6 {
        ("✶", Color::White)
    } else if explosion.ticks_left > 3 {
        ("*", Color::Yellow)
    } else {
        ("·", Color::DarkYellow)
    };
    draw_cell(out, explosion.x as f32, explosion.y as f32, color, glyph)
}

// ── Notices ───────────────────────────────────────────────────────────────────

fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::ScorePop | NoticeKind::LevelUp => Color::Yellow,
        NoticeKind::Penalty
        | NoticeKind::BossWarning
        | NoticeKind::BossEscaped
        | NoticeKind::Overheat => Color::Red,
        NoticeKind::PowerupPickup => Color::White,
    }
}

fn draw_notice<W: Write>(out: &mut W, state: &GameState, notice: &Notice) -> std::io::Result<()> {
    // Boss warnings flash instead of sitting static on screen.
    if notice.kind == NoticeKind::BossWarning && (notice.ticks_left / 5) % 2 == 1 {
        return Ok(());
    }
    let color = notice_color(notice.kind);
    match notice.anchor {
        NoticeAnchor::Cell(x, y) => {
            let row = (y - notice.rise()).max(2);
            draw_cell(out, x as f32, row as f32, color, &notice.text)?;
        }
        NoticeAnchor::Center => {
            let row = (state.height / 2).saturating_sub(2);
            print_centered(out, state.width, row, color, &notice.text)?;
        }
        NoticeAnchor::TopCenter => {
            print_centered(out, state.width, 3, color, &notice.text)?;
        }
    }
    Ok(())
}

//! Title and game-over screens.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::DeathReason;

use super::{print_centered, Starfield, C_HINT, C_SHIELD};

// ── Title screen ─────────────────────────────────────────────────────────────

pub fn render_title<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    stars: &Starfield,
    high_score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    stars.draw(out)?;

    let cy = height / 2;

    print_centered(out, width, cy.saturating_sub(8), Color::Cyan, "★  RETRO  SPACE  SHOOTER  ★")?;

    if high_score > 0 {
        let hs = format!("HIGH SCORE: {}", high_score);
        print_centered(out, width, cy.saturating_sub(6), Color::Yellow, &hs)?;
    }

    print_centered(out, width, cy.saturating_sub(4), Color::White, "[ENTER] Start    [Q] Quit")?;
    print_centered(
        out,
        width,
        cy.saturating_sub(2),
        C_HINT,
        "← → ↑ ↓ / WASD : Move    SPACE : Shoot",
    )?;

    // Powerup legend
    let cx = width / 2;
    out.queue(cursor::MoveTo(cx.saturating_sub(14), cy))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Power-ups (catch falling items):"))?;

    let legend: &[(&str, Color, &str)] = &[
        ("+", Color::Cyan,    " EXTRA PROJECTILE — more shots on screen"),
        ("»", Color::Yellow,  " FASTER FIRING    — quicker, cooler shots (10s)"),
        ("*", Color::Green,   " RAPID COOLING    — better heat dissipation"),
        ("O", C_SHIELD,       " SHIELD           — absorbs hits (7s)"),
    ];
    for (i, (sym, color, desc)) in legend.iter().enumerate() {
        let row = cy + 1 + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(14), row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*sym))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print(*desc))?;
    }

    print_centered(out, width, cy + 6, Color::Red, "WATCH YOUR WEAPON HEAT!")?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Game-over screen ─────────────────────────────────────────────────────────

pub fn render_game_over<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    stars: &Starfield,
    score: u32,
    high_score: u32,
    reason: DeathReason,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    stars.draw(out)?;

    let cy = height / 2;

    let box_lines = [
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    for (i, line) in box_lines.iter().enumerate() {
        print_centered(out, width, cy.saturating_sub(6) + i as u16, Color::Red, line)?;
    }

    let reason_line = match reason {
        DeathReason::ShipDestroyed => "YOUR SHIP WAS DESTROYED",
    };
    print_centered(out, width, cy.saturating_sub(2), Color::DarkRed, reason_line)?;

    let score_line = format!("SCORE: {}", score);
    print_centered(out, width, cy, Color::White, &score_line)?;

    let hs_line = format!("HIGH SCORE: {}", high_score);
    print_centered(out, width, cy + 1, Color::Yellow, &hs_line)?;
    if score >= high_score && score > 0 {
        print_centered(out, width, cy + 2, Color::Cyan, "NEW HIGH SCORE!")?;
    }

    print_centered(
        out,
        width,
        cy + 4,
        Color::Cyan,
        "TIP: COLLECT SHIELDS TO SURVIVE LONGER!",
    )?;
    print_centered(
        out,
        width,
        cy + 6,
        Color::White,
        "R - Play Again   M - Menu   Q - Quit",
    )?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! state it draws.  No game logic is performed; these modules only
//! translate state into queued terminal commands.

pub mod game;
pub mod menus;
pub mod transition;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use rand::Rng;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BORDER: Color = Color::DarkBlue;
pub const C_HUD_SCORE: Color = Color::Yellow;
pub const C_HUD_TEXT: Color = Color::White;
pub const C_ESCAPED: Color = Color::Red;
pub const C_PLAYER: Color = Color::White;
pub const C_SHIELD: Color = Color::Magenta;
pub const C_BOSS: Color = Color::Red;
pub const C_SHOOTING: Color = Color::Green;
pub const C_BASIC_DRIFT: Color = Color::DarkRed;
pub const C_BASIC_SINE: Color = Color::DarkYellow;
pub const C_BASIC_BOUNCE: Color = Color::Magenta;
pub const C_BULLET_PLAYER: Color = Color::Cyan;
pub const C_BULLET_ENEMY: Color = Color::Red;
pub const C_HINT: Color = Color::DarkGrey;
pub const C_STAR: Color = Color::DarkGrey;

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Print `text` centered on `row`.
pub fn print_centered<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Starfield ─────────────────────────────────────────────────────────────────

/// A falling star; part of the backdrop for menus and the warp transition.
#[derive(Clone, Debug)]
pub struct Star {
    x: u16,
    y: f32,
    speed: f32,
}

/// A scrolling backdrop of stars drifting down the screen, respawned at
/// the top as they fall off.
pub struct Starfield {
    stars: Vec<Star>,
    width: u16,
    height: u16,
}

impl Starfield {
    pub fn new(width: u16, height: u16, rng: &mut impl Rng) -> Starfield {
        let count = (width as usize * height as usize / 40).max(8);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0..width.max(1)),
                y: rng.gen_range(0.0..height.max(1) as f32),
                speed: rng.gen_range(0.05..0.4),
            })
            .collect();
        Starfield {
            stars,
            width,
            height,
        }
    }

    /// Advance every star; `factor` scales the speed (the warp transition
    /// ramps it up).
    pub fn advance(&mut self, rng: &mut impl Rng, factor: f32) {
        for star in self.stars.iter_mut() {
            star.y += star.speed * factor;
            if star.y >= self.height as f32 {
                star.x = rng.gen_range(0..self.width.max(1));
                star.y = 0.0;
                star.speed = rng.gen_range(0.05..0.4);
            }
        }
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.queue(style::SetForegroundColor(C_STAR))?;
        for star in &self.stars {
            let row = star.y as u16;
            if row < self.height {
                out.queue(cursor::MoveTo(star.x, row))?;
                out.queue(Print(if star.speed > 0.25 { "·" } else { "." }))?;
            }
        }
        Ok(())
    }
}

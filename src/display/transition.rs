//! The warp-speed interlude between the title screen and the game.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use super::{print_centered, Starfield};

/// Render one frame of the warp sequence.  `t` runs 0..total; the caller
/// ramps the starfield speed as it advances.
pub fn render<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    stars: &Starfield,
    t: u32,
    total: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    stars.draw(out)?;

    let progress = t as f32 / total.max(1) as f32;

    // Side streaks once the warp gets going.
    if progress > 0.5 {
        out.queue(style::SetForegroundColor(Color::Cyan))?;
        for row in (2..height.saturating_sub(2)).step_by(3) {
            if (t + row as u32) % 5 < 2 {
                out.queue(cursor::MoveTo(0, row))?;
                out.queue(Print("══"))?;
                out.queue(cursor::MoveTo(width.saturating_sub(2), row))?;
                out.queue(Print("══"))?;
            }
        }
    }

    // Banner fades in, then flashes near the end.
    if progress > 0.15 && (progress < 0.85 || (t / 4) % 2 == 0) {
        print_centered(out, width, height / 2, Color::Cyan, "W A R P   S P E E D")?;
    }

    // The ship rises from below the screen into its starting position.
    let start_y = height as i32 - 2;
    let end_y = height as i32 - 4;
    let ship_y = start_y - ((start_y - end_y) as f32 * progress) as i32;
    if ship_y >= 2 && ship_y < height as i32 - 2 {
        let cx = (width / 2) as i32;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(cursor::MoveTo(cx as u16, ship_y as u16))?;
        out.queue(Print("▲"))?;
        if ship_y + 1 < height as i32 - 2 {
            out.queue(cursor::MoveTo((cx - 1).max(0) as u16, (ship_y + 1) as u16))?;
            out.queue(Print("/|\\"))?;
        }
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.  The simulation works in virtual pixels,
//! so everything funnels through one pixel-to-cell mapping.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use star_raid::constants::{
    ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_RIGHT_MARGIN, PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use star_raid::entities::{Enemy, GameSession, GameStatus, LossReason, Projectile, Viewport};

// ── Pixel-to-cell mapping ─────────────────────────────────────────────────────

/// Virtual pixels per terminal column / row.  A character cell is roughly
/// twice as tall as it is wide, hence the 1:2 scale.
const CELL_W_PX: i32 = 10;
const CELL_H_PX: i32 = 20;

/// Simulation bounds for the current terminal size.  Queried fresh by the
/// caller every frame so a resize takes effect immediately.
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport {
        width: cols.max(20) as i32 * CELL_W_PX,
        height: rows.max(10) as i32 * CELL_H_PX,
    }
}

fn col_for(px: i32, viewport: Viewport) -> u16 {
    (px.clamp(0, viewport.width - 1) / CELL_W_PX) as u16
}

fn row_for(px: i32, viewport: Viewport) -> u16 {
    (px.clamp(0, viewport.height - 1) / CELL_H_PX) as u16
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_STAR: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Green;
const C_HUD_TIME: Color = Color::Cyan;
const C_HUD_TIME_LOW: Color = Color::Red;
const C_HUD_TARGET: Color = Color::Magenta;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameSession,
    viewport: Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cols = (viewport.width / CELL_W_PX) as u16;
    let rows = (viewport.height / CELL_H_PX) as u16;

    draw_starfield(out, cols, rows)?;
    draw_hud(out, state, cols)?;

    for enemy in &state.enemies {
        draw_enemy(out, enemy, viewport)?;
    }
    for projectile in &state.projectiles {
        draw_projectile(out, projectile, viewport)?;
    }
    draw_player(out, state, viewport)?;
    draw_controls_hint(out, rows)?;

    match state.status {
        GameStatus::Idle => draw_start_banner(out, state, cols, rows)?,
        GameStatus::Won | GameStatus::Lost(_) => draw_end_banner(out, state, cols, rows)?,
        GameStatus::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background starfield (decoration only) ────────────────────────────────────

/// Sparse fixed starfield.  Positions come from a small multiplicative hash
/// rather than an RNG so the sky doesn't shimmer between frames.
fn draw_starfield<W: Write>(out: &mut W, cols: u16, rows: u16) -> std::io::Result<()> {
    if cols == 0 || rows < 4 {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_STAR))?;
    for i in 0u32..70 {
        let h = i.wrapping_mul(2_654_435_761);
        let col = (h >> 16) as u16 % cols;
        let row = 1 + (h & 0xffff) as u16 % (rows - 3);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(if i % 3 == 0 { "·" } else { "." }))?;
    }
    Ok(())
}

// ── HUD (row 0): score, level, time remaining, target score ──────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameSession, cols: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>5}", state.score)))?;

    out.queue(cursor::MoveTo(cols / 4, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level:{:>3}", state.level)))?;

    let time_color = if state.time_left <= 5 {
        C_HUD_TIME_LOW
    } else {
        C_HUD_TIME
    };
    out.queue(cursor::MoveTo(cols / 2, 0))?;
    out.queue(style::SetForegroundColor(time_color))?;
    out.queue(Print(format!("Time:{:>4}s", state.time_left)))?;

    let target_str = format!("Target:{:>5}", state.target_score);
    let rx = cols.saturating_sub(target_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TARGET))?;
    out.queue(Print(&target_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    state: &GameSession,
    viewport: Viewport,
) -> std::io::Result<()> {
    // 2-row sprite:
    //   ▲       ← tip
    //  /█\      ← fuselage + wings
    let cx = col_for(
        state.player.x.min(viewport.width - PLAYER_RIGHT_MARGIN),
        viewport,
    );
    let tip_row = row_for(viewport.height - 70, viewport);

    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(cx, tip_row))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(cx.saturating_sub(1), tip_row + 1))?;
    out.queue(Print("/█\\"))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, viewport: Viewport) -> std::io::Result<()> {
    // 2-row sprite:
    //   «▼»    ← swept-back wings
    //   ╚═╝    ← engine block
    let cx = col_for(enemy.x + ENEMY_WIDTH / 2, viewport);
    let top = row_for(enemy.y + ENEMY_HEIGHT / 2, viewport);
    let lx = cx.saturating_sub(1);

    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(cursor::MoveTo(lx, top))?;
    out.queue(Print("«▼»"))?;
    out.queue(cursor::MoveTo(lx, top + 1))?;
    out.queue(Print("╚═╝"))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &Projectile,
    viewport: Viewport,
) -> std::io::Result<()> {
    let top_px = viewport.height - projectile.bottom - PROJECTILE_HEIGHT;
    if top_px < 0 {
        return Ok(());
    }
    let cx = col_for(projectile.x + PROJECTILE_WIDTH / 2, viewport);
    out.queue(cursor::MoveTo(cx, row_for(top_px, viewport)))?;
    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    out.queue(Print("║"))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   ↑ : Shoot   ENTER : Start   Q : Quit"))?;
    Ok(())
}

// ── Full-screen banners ───────────────────────────────────────────────────────

fn centered_line<W: Write>(
    out: &mut W,
    cols: u16,
    row: u16,
    color: Color,
    msg: &str,
) -> std::io::Result<()> {
    let col = (cols / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_start_banner<W: Write>(
    out: &mut W,
    state: &GameSession,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cy = rows / 2;
    centered_line(out, cols, cy.saturating_sub(3), Color::Cyan, "★  S T A R   R A I D  ★")?;
    centered_line(
        out,
        cols,
        cy.saturating_sub(1),
        Color::White,
        "Shoot the invaders before time runs out",
    )?;
    centered_line(
        out,
        cols,
        cy,
        Color::DarkGrey,
        &format!(
            "Reach {} points in {} seconds to win",
            state.target_score, state.time_left
        ),
    )?;
    centered_line(out, cols, cy + 2, Color::Yellow, "PRESS ENTER TO START")?;
    Ok(())
}

fn draw_end_banner<W: Write>(
    out: &mut W,
    state: &GameSession,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let (headline, color) = match state.status {
        GameStatus::Won => ("YOU WIN!", Color::Yellow),
        GameStatus::Lost(LossReason::TimeExpired) => ("TIME'S UP!  GAME OVER", Color::Red),
        GameStatus::Lost(LossReason::EnemyReachedBottom) => {
            ("AN INVADER REACHED YOU!  GAME OVER", Color::Red)
        }
        _ => return Ok(()),
    };

    let frame = "═".repeat(headline.chars().count() + 4);
    let cy = rows / 2;
    centered_line(out, cols, cy.saturating_sub(2), color, &format!("╔{}╗", frame))?;
    centered_line(out, cols, cy.saturating_sub(1), color, &format!("║  {}  ║", headline))?;
    centered_line(out, cols, cy, color, &format!("╚{}╝", frame))?;
    centered_line(
        out,
        cols,
        cy + 1,
        Color::Yellow,
        &format!("Final Score: {:>5}   Level: {}", state.score, state.level),
    )?;
    centered_line(out, cols, cy + 3, Color::White, "PRESS ENTER TO PLAY AGAIN")?;
    Ok(())
}

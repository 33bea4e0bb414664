/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session.  No game logic is performed; this module only scales screen-space
/// rectangles from the camera down to terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use side_scroller::config::{GROUND_LINE, PLAYER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use side_scroller::entities::{EndReason, EntityKind, Rect};
use side_scroller::session::GameSession;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::DarkGreen;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Magenta;
const C_COLLECTIBLE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// Rows above the play field reserved for the HUD.
const HUD_ROWS: u16 = 1;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let view = Viewport::new(width, height);

    if let Some(banner) = session.banner() {
        draw_game_over(out, session, banner, &view)?;
    } else {
        draw_ground(out, session, &view)?;
        for entity in session.entities() {
            let rect = session.camera().apply(entity);
            draw_rect(out, &view, &rect, glyph(entity.kind()))?;
        }
        draw_hud(out, session)?;
        draw_controls_hint(out, &view)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── World → terminal scaling ──────────────────────────────────────────────────

struct Viewport {
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(width: u16, height: u16) -> Self {
        Self {
            cols: width.max(1),
            // bottom row is kept for the controls hint
            rows: height.saturating_sub(HUD_ROWS + 1).max(1),
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x / SCREEN_WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / SCREEN_HEIGHT * self.rows as f32).floor() as i32 + HUD_ROWS as i32
    }

    /// Cell span covered by `rect`, at least one cell, clipped to the field.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let left = self.col(rect.x);
        let top = self.row(rect.y);
        let right = self.col(rect.right()).max(left + 1);
        let bottom = self.row(rect.bottom()).max(top + 1);

        let min_row = HUD_ROWS as i32;
        let max_row = min_row + self.rows as i32;
        let left = left.max(0);
        let top = top.max(min_row);
        let right = right.min(self.cols as i32);
        let bottom = bottom.min(max_row);
        if left >= right || top >= bottom {
            return None;
        }
        Some((left as u16, top as u16, right as u16, bottom as u16))
    }
}

fn glyph(kind: EntityKind) -> (char, Color) {
    match kind {
        EntityKind::Player => ('█', C_PLAYER),
        EntityKind::Enemy => ('▓', C_ENEMY),
        EntityKind::Projectile => ('═', C_PROJECTILE),
        EntityKind::Collectible => ('◆', C_COLLECTIBLE),
    }
}

fn draw_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    (ch, color): (char, Color),
) -> std::io::Result<()> {
    let Some((left, top, right, bottom)) = view.cells(rect) else {
        return Ok(());
    };
    let line: String = std::iter::repeat(ch).take((right - left) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in top..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Ground ────────────────────────────────────────────────────────────────────

fn draw_ground<W: Write>(
    out: &mut W,
    session: &GameSession,
    view: &Viewport,
) -> std::io::Result<()> {
    // The floor is the bottom edge of anything standing on the ground line.
    let floor = GROUND_LINE + PLAYER_SIZE.1 + session.camera().offset_y;
    let row = view.row(floor);
    if row < HUD_ROWS as i32 || row >= (HUD_ROWS + view.rows) as i32 {
        return Ok(());
    }
    out.queue(style::SetForegroundColor(C_GROUND))?;
    out.queue(cursor::MoveTo(0, row as u16))?;
    out.queue(Print("▀".repeat(view.cols as usize)))?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(session.hud_lines().join("   ")))?;
    Ok(())
}

// ── Controls hint (bottom row) ────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let hint = "← → / A D : Move   SPACE : Jump   Z : Shoot   Q : Quit";
    let cx = view.cols / 2;
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        HUD_ROWS + view.rows,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── End screen ────────────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    session: &GameSession,
    banner: &str,
    view: &Viewport,
) -> std::io::Result<()> {
    let banner_color = match session.status().end_reason() {
        Some(EndReason::Victory) => Color::Green,
        _ => Color::Red,
    };
    let title = format!("║  {:^14}  ║", banner);
    let score_line = format!("Final Score: {}", session.player().score);

    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", banner_color),
        (&title, banner_color),
        ("╚══════════════════╝", banner_color),
        (&score_line, Color::Yellow),
        ("R - Restart  Q - Quit", Color::White),
    ];

    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (text, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }
    Ok(())
}

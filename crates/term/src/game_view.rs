//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The field is measured in field pixels; the view maps it onto character
//! cells. By default one column covers 10 px and one row 20 px, which keeps
//! the classic 800x640 field at 80x32 cells and roughly square on screen.
//! Smaller terminals shrink the mapping uniformly.

use crate::core::{Appearance, GameSnapshot, SpriteRole, SpriteView};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ObstacleKind, Outcome};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the field inside the viewport for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    /// Top-left cell of the field (inside the border).
    pub x: u16,
    pub y: u16,
    /// Field size in cells.
    pub cols: u16,
    pub rows: u16,
    /// Field pixels per column / row after scaling.
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl FieldRect {
    /// Cell span covered by the field-pixel interval `[start, start + len)`,
    /// clipped to `0..cells`.
    fn span(start: f32, len: f32, px_per_cell: f32, cells: u16) -> Option<(u16, u16)> {
        let lo = (start / px_per_cell).floor().max(0.0);
        let hi = ((start + len) / px_per_cell).ceil().min(cells as f32);
        if hi <= lo {
            return None;
        }
        Some((lo as u16, hi as u16))
    }

    /// Cell rectangle `(x, y, w, h)` covered by a sprite, relative to the field.
    pub fn cells_for(&self, s: &SpriteView) -> Option<(u16, u16, u16, u16)> {
        let (x0, x1) = Self::span(s.x, s.width, self.px_per_col, self.cols)?;
        let (y0, y1) = Self::span(s.y, s.height, self.px_per_row, self.rows)?;
        Some((x0, y0, x1 - x0, y1 - y0))
    }
}

/// A lightweight terminal renderer for the frog game.
pub struct GameView {
    /// Field pixels per terminal column at full size.
    px_per_col: f32,
    /// Field pixels per terminal row at full size.
    px_per_row: f32,
    anchor_y: AnchorY,
    show_status: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 1:2 compensates for typical terminal glyph aspect ratio.
        Self {
            px_per_col: 10.0,
            px_per_row: 20.0,
            anchor_y: AnchorY::Center,
            show_status: true,
        }
    }
}

const STATUS_HINT: &str = "arrows move  space pause  r reset  q quit";

impl GameView {
    pub fn new(px_per_col: f32, px_per_row: f32) -> Self {
        assert!(
            px_per_col > 0.0 && px_per_row > 0.0,
            "cell scale must be positive"
        );
        Self {
            px_per_col,
            px_per_row,
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_status_line(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    /// Where the field lands in `viewport`, or `None` if it cannot fit at all.
    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<FieldRect> {
        let status_rows = if self.show_status { 1 } else { 0 };
        let avail_w = viewport.width.checked_sub(2)?;
        let avail_h = viewport.height.checked_sub(2 + status_rows)?;
        if avail_w == 0 || avail_h == 0 {
            return None;
        }

        let want_cols = snap.field.width / self.px_per_col;
        let want_rows = snap.field.height / self.px_per_row;
        let shrink = (want_cols / avail_w as f32)
            .max(want_rows / avail_h as f32)
            .max(1.0);

        let px_per_col = self.px_per_col * shrink;
        let px_per_row = self.px_per_row * shrink;
        let cols = ((snap.field.width / px_per_col).ceil() as u16).clamp(1, avail_w);
        let rows = ((snap.field.height / px_per_row).ceil() as u16).clamp(1, avail_h);

        let frame_w = cols + 2;
        let frame_h = rows + 2 + status_rows;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Some(FieldRect {
            x: start_x + 1,
            y: start_y + 1,
            cols,
            rows,
            px_per_col,
            px_per_row,
        })
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let Some(rect) = self.layout(snap, viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, rect.x - 1, rect.y - 1, rect.cols + 2, rect.rows + 2, border);

        // Sprites arrive in draw order.
        for sprite in &snap.sprites {
            self.draw_sprite(fb, &rect, sprite);
        }

        // Overlays.
        if snap.outcome.is_terminal() {
            self.draw_banner(fb, &rect, snap.outcome.banner(), snap.outcome.color());
        } else if snap.paused {
            self.draw_banner(fb, &rect, "PAUSED", Outcome::Playing.color());
        }

        if self.show_status {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(rect.x - 1, rect.y + rect.rows + 1, STATUS_HINT, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, rect: &FieldRect, sprite: &SpriteView) {
        let Some((cx, cy, cw, ch)) = rect.cells_for(sprite) else {
            return;
        };

        match sprite.appearance {
            Appearance::Fill(color) => {
                fb.fill_rect(rect.x + cx, rect.y + cy, cw, ch, ' ', CellStyle::solid(color));
            }
            Appearance::Image(img) => {
                let glyph = glyph_for(sprite.role);
                let bold = sprite.role == SpriteRole::Frog;
                for dy in 0..ch {
                    for dx in 0..cw {
                        let px = rect.x + cx + dx;
                        let py = rect.y + cy + dy;
                        // Keep whatever is underneath as the background.
                        let bg = fb.get(px, py).map(|c| c.style.bg).unwrap_or_default();
                        let style = CellStyle {
                            fg: img.tint,
                            bg,
                            bold,
                            dim: false,
                        };
                        fb.put_char(px, py, glyph, style);
                    }
                }
            }
        }
    }

    /// Centre `text` on the field.
    fn draw_banner(&self, fb: &mut FrameBuffer, rect: &FieldRect, text: &str, color: Rgb) {
        let style = CellStyle {
            fg: color,
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let anchor_x = rect.x + rect.cols / 2;
        let anchor_y = rect.y + rect.rows / 2;
        draw_text_rel(fb, text, anchor_x, anchor_y, 0.5, style);
    }
}

/// Draw one row of `text` so that the fraction `align_x` of its width sits on
/// the anchor column.
///
/// `align_x = 0.5` centres the text, `0.0` left-aligns it at the anchor.
pub fn draw_text_rel(
    fb: &mut FrameBuffer,
    text: &str,
    anchor_x: u16,
    anchor_y: u16,
    align_x: f32,
    style: CellStyle,
) {
    let w = text.chars().count() as f32;
    let x = (anchor_x as f32 - w * align_x.clamp(0.0, 1.0)).round().max(0.0) as u16;
    fb.put_str(x, anchor_y, text, style);
}

fn glyph_for(role: SpriteRole) -> char {
    match role {
        SpriteRole::Frog => '@',
        SpriteRole::Obstacle(ObstacleKind::Car) => '█',
        SpriteRole::Obstacle(ObstacleKind::Truck) => '▓',
        SpriteRole::Obstacle(ObstacleKind::Log) => '═',
        SpriteRole::Obstacle(ObstacleKind::Turtle) => 'o',
        SpriteRole::Backdrop | SpriteRole::Goal => ' ',
    }
}

//! Framebuffer and style types for terminal rendering.

pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Solid block of one color (foreground and background alike).
    pub const fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
            dim: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Character grid drawn by the game view and flushed by the renderer.
///
/// Cells are stored row-major. Every write is clipped to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the grid size, reusing the allocation. Cell contents are
    /// unspecified afterwards; callers redraw the whole frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells; empty when `y` is out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        self.span(0, y, self.width)
            .map_or(&[], |range| &self.cells[range])
    }

    /// Index range of `len` cells starting at (`x`, `y`), cut at the right
    /// edge. `None` when nothing of it is visible.
    fn span(&self, x: u16, y: u16, len: u16) -> Option<std::ops::Range<usize>> {
        if y >= self.height || x >= self.width || len == 0 {
            return None;
        }
        let end = x.saturating_add(len).min(self.width);
        let base = usize::from(y) * usize::from(self.width);
        Some(base + usize::from(x)..base + usize::from(end))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.span(x, y, 1).map(|range| self.cells[range.start])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(range) = self.span(x, y, 1) {
            self.cells[range.start] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right; characters past the right edge are dropped.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        if let Some(range) = self.span(x, y, u16::MAX) {
            for (cell, ch) in self.cells[range].iter_mut().zip(s.chars()) {
                *cell = Cell { ch, style };
            }
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let bottom = y.saturating_add(h).min(self.height);
        for row in y..bottom {
            if let Some(range) = self.span(x, row, w) {
                self.cells[range].fill(Cell { ch, style });
            }
        }
    }

    /// The grid as plain text, one `\n`-terminated line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + usize::from(self.height));
        for y in 0..self.height {
            out.extend(self.row(y).iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

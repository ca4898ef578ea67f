//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; every other frame only rewrites the runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// Owns the terminal while the game runs.
///
/// `enter` switches to raw mode on the alternate screen and `exit` undoes it.
/// Dropping an entered renderer exits as well.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows, if known.
    front: Option<FrameBuffer>,
    scratch: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            scratch: Vec::with_capacity(32 * 1024),
            active: false,
        }
    }

    /// Current terminal size, falling back to 80x24 when it cannot be queried.
    pub fn viewport() -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.front = None;

        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide
        )?;
        self.flush_scratch()
    }

    /// Restore the terminal. A no-op unless entered.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.scratch.clear();
        queue!(
            self.scratch,
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        )?;
        let flushed = self.flush_scratch();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Present `fb`, then hand back the previous frame in its place.
    ///
    /// Keep one `FrameBuffer` and pass it every frame: the renderer keeps the
    /// presented frame for diffing and returns its old buffer for reuse.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        let mut back = match self.front.take() {
            Some(front) if front.width() == fb.width() && front.height() == fb.height() => {
                encode_diff_into(&front, fb, &mut self.scratch)?;
                front
            }
            Some(mut front) => {
                encode_full_into(fb, &mut self.scratch)?;
                front.resize(fb.width(), fb.height());
                front
            }
            None => {
                encode_full_into(fb, &mut self.scratch)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_scratch()?;

        std::mem::swap(&mut back, fb);
        self.front = Some(back);
        Ok(())
    }

    fn flush_scratch(&mut self) -> Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(&self.scratch)?;
        lock.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Builds crossterm commands without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut enc = StyleEncoder::new(out);
    for y in 0..fb.height() {
        enc.out.queue(cursor::MoveTo(0, y))?;
        for &cell in fb.row(y) {
            enc.put(cell)?;
        }
    }
    enc.finish()
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Frames of different sizes are treated as fully changed.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    let mut enc = StyleEncoder::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        if !same_size {
            enc.run(0, y, row)?;
            continue;
        }
        for (start, end) in changed_runs(prev.row(y), row) {
            enc.run(start as u16, y, &row[start..end])?;
        }
    }
    enc.finish()
}

/// Half-open `[start, end)` column ranges where two equally long rows differ.
fn changed_runs<'a>(a: &'a [Cell], b: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < b.len() && a[x] == b[x] {
            x += 1;
        }
        if x >= b.len() {
            return None;
        }
        let start = x;
        while x < b.len() && a[x] != b[x] {
            x += 1;
        }
        Some((start, x))
    })
}

/// Writes cells, emitting style changes only when they differ from the last
/// cell written.
struct StyleEncoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> StyleEncoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn run(&mut self, x: u16, y: u16, cells: &[Cell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for &cell in cells {
            self.put(cell)?;
        }
        Ok(())
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        self.set_style(cell.style)?;
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn set_style(&mut self, next: CellStyle) -> Result<()> {
        let prev = self.style;
        if prev == Some(next) {
            return Ok(());
        }

        // SGR reset also clears colors, so attributes go first.
        let attrs_changed = prev.map_or(true, |p| p.bold != next.bold || p.dim != next.dim);
        if attrs_changed {
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if next.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map_or(true, |p| p.fg != next.fg) {
            self.out.queue(SetForegroundColor(to_color(next.fg)))?;
        }
        if attrs_changed || prev.map_or(true, |p| p.bg != next.bg) {
            self.out.queue(SetBackgroundColor(to_color(next.bg)))?;
        }

        self.style = Some(next);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

//! TerminalRenderer: presents viewer frames on the real terminal.
//!
//! Frames are encoded into a byte buffer first and written with a single
//! flush. Only cells that differ from the previously presented frame are
//! sent, unless there is no usable previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen, if it can be diffed against.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to the viewer screen: raw input, alternate buffer, no cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.write_out()
    }

    /// Give the terminal back in the state the shell expects.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        queue_reset(&mut self.out)?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.write_out()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen; the next frame is sent in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Present `fb`, then hand back the previously shown frame in its place.
    ///
    /// The viewer renders into the returned buffer next, so two buffers are
    /// recycled for the whole session.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.out)?;
        self.write_out()?;

        let mut previous = self
            .shown
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut previous, fb);
        self.shown = Some(previous);
        Ok(())
    }

    fn write_out(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next` on screen.
///
/// Without a previous frame, or when its size differs, the screen is cleared
/// and every row is written. Otherwise only changed runs are written.
pub fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = StylePen::new(out);
    match shown.filter(|prev| prev.width() == next.width() && prev.height() == next.height()) {
        Some(prev) => {
            for_each_changed_run(prev, next, |x, y, len| pen.run(next, x, y, len))?;
        }
        None => {
            pen.out.queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..next.height() {
                pen.run(next, 0, y, next.width())?;
            }
        }
    }
    queue_reset(pen.out)
}

/// Writes cells while skipping style commands that would repeat the last one.
struct StylePen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> StylePen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    /// Write `len` cells of row `y` starting at column `x`.
    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            self.cell(fb.get(x + dx, y).unwrap_or_default())?;
        }
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let s = cell.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetForegroundColor(color(s.fg)))?;
            self.out.queue(SetBackgroundColor(color(s.bg)))?;
            if s.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if s.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(s);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn queue_reset(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every maximal horizontal run of differing cells.
///
/// Both frames must have the same size.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    for y in 0..next.height() {
        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < w {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}

//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! Every glyph is placed with an absolute cursor move, so a frame never
//! scrolls the screen. `RenderMode::Full` rewrites every position each frame;
//! `RenderMode::Diff` only rewrites runs that changed since the last frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::LifeError;
use crate::fb::{FrameBuffer, Rgb, Style};

/// How much of the screen each frame rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One cursor move + glyph for every position.
    #[default]
    Full,
    /// Only positions that changed since the previous frame.
    Diff,
}

impl RenderMode {
    /// Parse render mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "full" => Some(RenderMode::Full),
            "diff" => Some(RenderMode::Diff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Full => "full",
            RenderMode::Diff => "diff",
        }
    }
}

/// Query the controlling terminal's size as (columns, rows).
pub fn terminal_size() -> std::result::Result<(u16, u16), LifeError> {
    let (w, h) = terminal::size()?;
    if w == 0 || h == 0 {
        return Err(LifeError::EmptyGrid {
            width: w,
            height: h,
        });
    }
    Ok((w, h))
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: RenderMode,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(mode: RenderMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, mode: RenderMode) -> Self {
        Self {
            out,
            mode,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Underlying writer. Used by tests to inspect emitted bytes.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Clear the screen.
    ///
    /// Nothing else about the terminal is changed, so a run killed with
    /// Ctrl-C leaves the shell usable without calling [`exit`](Self::exit).
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    /// Reset colors and park the cursor below the last frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        if let Some(last) = &self.last {
            let bottom = last.height().saturating_sub(1);
            self.buf.queue(cursor::MoveTo(0, bottom))?;
            self.buf.queue(Print("\r\n"))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer keeps the previous frame for diffing and hands the old
    /// buffer back through `fb`, so callers can reuse it without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self.last.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        let needs_full = self.mode == RenderMode::Full
            || prev.width() != fb.width()
            || prev.height() != fb.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(fb, &mut self.buf)?;
        } else {
            encode_diff_into(&prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`: one cursor move and glyph per position.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<Style> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(cursor::MoveTo(x, y))?;
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<Style> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    // SGR reset clears colors too, so it has to come first.
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

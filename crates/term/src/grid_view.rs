//! GridView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{FrameBuffer, ScreenCell};
use crate::glyphs::{glyph, style};
use crate::types::{Encoding, DEAD};

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

    /// Viewport exactly covering `grid`.
    pub fn of(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }
}

/// Draws one glyph per grid cell, with grid (0, 0) at the viewport's top-left.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridView {
    encoding: Encoding,
}

impl GridView {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Render `grid` into an existing framebuffer, resized to `viewport`.
    ///
    /// Grid cells beyond the viewport are clipped; viewport positions beyond
    /// the grid stay blank.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let w = grid.width().min(viewport.width);
        let h = grid.height().min(viewport.height);
        for y in 0..h {
            for x in 0..w {
                let state = grid.get(x, y).unwrap_or(DEAD);
                fb.set(
                    x,
                    y,
                    ScreenCell {
                        ch: glyph(self.encoding, state),
                        style: style(state),
                    },
                );
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }
}

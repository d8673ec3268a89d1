//! `Draw`: the seam between the simulation and whatever displays it.

use std::io::Write;

use anyhow::Result;

use crate::core::Grid;
use crate::fb::FrameBuffer;
use crate::grid_view::{GridView, Viewport};
use crate::renderer::TerminalRenderer;

/// Displays one generation. Called once per frame by the drive loop.
pub trait Draw {
    fn draw(&mut self, grid: &Grid) -> Result<()>;
}

/// Terminal-backed [`Draw`]: `GridView` into a reused framebuffer, then
/// flushed through a `TerminalRenderer`.
pub struct Screen<W: Write> {
    view: GridView,
    fb: FrameBuffer,
    renderer: TerminalRenderer<W>,
}

impl<W: Write> Screen<W> {
    pub fn new(view: GridView, renderer: TerminalRenderer<W>) -> Self {
        Self {
            view,
            fb: FrameBuffer::new(0, 0),
            renderer,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }
}

impl<W: Write> Draw for Screen<W> {
    fn draw(&mut self, grid: &Grid) -> Result<()> {
        self.view.render_into(grid, Viewport::of(grid), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

//! Terminal rendering for the simulator.
//!
//! Rendering is split in two so the grid-to-glyph mapping stays testable
//! without a terminal:
//!
//! - [`grid_view`] maps a `core::Grid` into a [`FrameBuffer`] (pure)
//! - [`renderer`] turns a framebuffer into cursor-addressed escape sequences
//!   and writes them out
//!
//! [`Draw`] is the interface the drive loop talks to; [`Screen`] is its
//! terminal implementation.

pub mod fb;
pub mod glyphs;
pub mod grid_view;
pub mod renderer;
pub mod screen;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Rgb, ScreenCell, Style};
pub use glyphs::{glyph, style};
pub use grid_view::{GridView, Viewport};
pub use renderer::{
    encode_diff_into, encode_full_into, terminal_size, RenderMode, TerminalRenderer,
};
pub use screen::{Draw, Screen};

//! TUI Life (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_life::{core,term,types}` and adds
//! the application layer: [`config`] and the [`runner`] drive loop.

pub mod config;
pub mod runner;

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

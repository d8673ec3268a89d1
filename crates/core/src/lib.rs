//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life rules and grid state. It has **no**
//! dependency on terminal I/O, so every rule can be tested headless.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size 2D field of cell states with edge-clipped neighbor counts
//! - [`rules`]: B3/S23 successor computation for both cell encodings
//! - [`patterns`]: named seed shapes placed relative to the grid center
//! - [`simulation`]: current generation plus generation counter
//! - [`error`]: error type shared by the workspace
//!
//! # Rules
//!
//! - A dead cell with exactly 3 alive neighbors is born
//! - An alive cell with 2 or 3 alive neighbors survives
//! - Every other alive cell dies; every other dead cell stays dead
//! - Cells outside the grid count as dead (no wrap-around)
//!
//! Each step reads the current generation and writes a brand-new grid.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{patterns::BLINKER, Simulation};
//! use tui_life_types::Encoding;
//!
//! let mut sim = Simulation::seeded(5, 5, Encoding::Binary, &BLINKER).unwrap();
//! assert_eq!(sim.grid().alive_cells(), vec![(2, 1), (2, 2), (2, 3)]);
//!
//! sim.advance();
//! assert_eq!(sim.grid().alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
//! ```

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod simulation;

pub use tui_life_types as types;

pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{seed, Pattern, PATTERNS};
pub use rules::{next_state, step};
pub use simulation::Simulation;

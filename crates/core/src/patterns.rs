//! Seed patterns
//!
//! Each pattern is a list of (dx, dy) offsets from the grid center
//! `(W/2, H/2)`. Seeding writes a single state value at every offset.

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::types::CellState;

/// A named seed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i16, i16)],
}

/// Five-cell cluster; evolves into a glider-like spread.
pub const CLUSTER: Pattern = Pattern {
    name: "cluster",
    cells: &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)],
};

/// Methuselah that stabilises after 5206 generations.
pub const ACORN: Pattern = Pattern {
    name: "acorn",
    cells: &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
};

/// Vanishes after 130 generations.
pub const DIEHARD: Pattern = Pattern {
    name: "diehard",
    cells: &[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)],
};

/// Vertical period-2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, -1), (0, 0), (0, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[CLUSTER, ACORN, DIEHARD, BLINKER, GLIDER];

impl Default for Pattern {
    fn default() -> Self {
        CLUSTER
    }
}

impl Pattern {
    /// Look up a built-in pattern by name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::patterns::{Pattern, ACORN};
    ///
    /// assert_eq!(Pattern::from_str("Acorn"), Some(ACORN));
    /// assert_eq!(Pattern::from_str("gosper"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase();
        PATTERNS.iter().copied().find(|p| p.name == name)
    }

    /// Comma-separated list of built-in names.
    pub fn names() -> String {
        PATTERNS
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Absolute coordinates of the pattern centred on `grid`, or None if any
    /// cell falls outside it.
    pub fn place(&self, grid: &Grid) -> Option<Vec<(u16, u16)>> {
        let (cx, cy) = grid.center();
        self.cells
            .iter()
            .map(|&(dx, dy)| {
                let x = cx as i32 + dx as i32;
                let y = cy as i32 + dy as i32;
                if x < 0 || y < 0 || x >= grid.width() as i32 || y >= grid.height() as i32 {
                    None
                } else {
                    Some((x as u16, y as u16))
                }
            })
            .collect()
    }
}

/// Write `state` at every cell of `pattern`, centred on the grid.
///
/// The grid is left untouched if any cell would land out of bounds.
pub fn seed(grid: &mut Grid, pattern: &Pattern, state: CellState) -> Result<()> {
    let coords = pattern.place(grid).ok_or(LifeError::PatternOutOfBounds {
        pattern: pattern.name,
        width: grid.width(),
        height: grid.height(),
    })?;
    for (x, y) in coords {
        grid.set(x, y, state);
    }
    Ok(())
}

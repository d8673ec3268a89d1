//! Simulation - owns the current generation and advances it.

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::{seed, Pattern};
use crate::rules::step;
use crate::types::Encoding;

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    encoding: Encoding,
    generation: u32,
}

impl Simulation {
    /// Wrap an existing grid as generation 0.
    pub fn new(grid: Grid, encoding: Encoding) -> Self {
        Self {
            grid,
            encoding,
            generation: 0,
        }
    }

    /// Create a `width` x `height` grid and seed `pattern` at its center.
    pub fn seeded(width: u16, height: u16, encoding: Encoding, pattern: &Pattern) -> Result<Self> {
        let mut grid = Grid::new(width, height);
        if grid.is_empty() {
            return Err(LifeError::EmptyGrid { width, height });
        }
        seed(&mut grid, pattern, encoding.seed_state())?;
        Ok(Self::new(grid, encoding))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Replace the current generation with its successor.
    pub fn advance(&mut self) {
        self.grid = step(&self.grid, self.encoding);
        self.generation += 1;
    }
}

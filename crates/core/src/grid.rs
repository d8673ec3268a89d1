//! Grid module - the cell-state field of one generation
//!
//! The grid is `height` rows by `width` columns of [`CellState`] values,
//! stored as a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y is the
//! row (top to bottom). Dimensions are fixed at construction.

use arrayvec::ArrayVec;

use crate::types::{is_alive, CellState, DEAD};

/// Moore neighborhood offsets as (dx, dy).
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One generation of the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![DEAD; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the grid has zero cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw row-major cell slice.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Calculate flat index from signed (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<CellState> {
        self.index(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, state: CellState) -> bool {
        match self.index(x as i32, y as i32) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (x, y) is in bounds and alive.
    pub fn is_alive(&self, x: u16, y: u16) -> bool {
        self.get(x, y).is_some_and(is_alive)
    }

    /// In-bounds Moore neighbors of (x, y). The grid does not wrap.
    pub fn neighbors(&self, x: u16, y: u16) -> ArrayVec<(u16, u16), 8> {
        let mut out = ArrayVec::new();
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if self.index(nx, ny).is_some() {
                out.push((nx as u16, ny as u16));
            }
        }
        out
    }

    /// Number of alive cells in the Moore neighborhood of (x, y).
    pub fn live_neighbors(&self, x: u16, y: u16) -> u8 {
        self.neighbors(x, y)
            .iter()
            .filter(|&&(nx, ny)| self.is_alive(nx, ny))
            .count() as u8
    }

    /// Number of alive cells in the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&s| is_alive(s)).count()
    }

    /// Center cell as (x, y) = (W/2, H/2).
    pub fn center(&self) -> (u16, u16) {
        (self.width / 2, self.height / 2)
    }

    /// Coordinates of all alive cells in row-major order.
    pub fn alive_cells(&self) -> Vec<(u16, u16)> {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| is_alive(s))
            .map(|(i, _)| ((i % w) as u16, (i / w) as u16))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALIVE;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.cells().len(), 28);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut grid = Grid::new(3, 3);
        assert!(!grid.set(3, 0, ALIVE));
        assert!(!grid.set(0, 3, ALIVE));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(3, 3), None);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.neighbors(0, 0).len(), 3);
        assert_eq!(grid.neighbors(4, 4).len(), 3);
        assert_eq!(grid.neighbors(2, 0).len(), 5);
        assert_eq!(grid.neighbors(2, 2).len(), 8);
    }

    #[test]
    fn live_neighbors_only_counts_positive_states() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, 1);
        grid.set(1, 0, 3);
        grid.set(2, 0, -1);
        grid.set(0, 1, -3);
        assert_eq!(grid.live_neighbors(1, 1), 2);
    }

    #[test]
    fn live_neighbors_excludes_self() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, ALIVE);
        assert_eq!(grid.live_neighbors(1, 1), 0);
    }

    #[test]
    fn full_corner_counts_at_most_three() {
        let mut grid = Grid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, ALIVE);
            }
        }
        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.live_neighbors(3, 0), 3);
        assert_eq!(grid.live_neighbors(0, 3), 3);
        assert_eq!(grid.live_neighbors(3, 3), 3);
        assert_eq!(grid.live_neighbors(1, 0), 5);
        assert_eq!(grid.live_neighbors(1, 1), 8);
    }

    #[test]
    fn center_uses_integer_halves() {
        assert_eq!(Grid::new(80, 24).center(), (40, 12));
        assert_eq!(Grid::new(5, 3).center(), (2, 1));
    }

    #[test]
    fn alive_cells_are_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 0, ALIVE);
        grid.set(0, 2, ALIVE);
        grid.set(1, 0, 2);
        assert_eq!(grid.alive_cells(), vec![(1, 0), (3, 0), (0, 2)]);
    }
}

//! Rules module - the B3/S23 successor computation
//!
//! [`step`] reads one generation and returns a freshly allocated successor.
//! The input grid is never written to, so results do not depend on the order
//! cells are visited.

use crate::grid::Grid;
use crate::types::{is_alive, CellState, Encoding, ALIVE, DEAD, JUST_DIED, MAX_AGE};

/// Birth neighbor count.
pub const BIRTH: u8 = 3;

/// Survival neighbor counts (inclusive range).
pub const SURVIVE_MIN: u8 = 2;
pub const SURVIVE_MAX: u8 = 3;

/// Next state of a single cell given its alive-neighbor count.
///
/// # Examples
///
/// ```
/// use tui_life_core::next_state;
/// use tui_life_types::Encoding;
///
/// // Birth
/// assert_eq!(next_state(Encoding::Binary, 0, 3), 1);
/// // Death marks the cell as just died
/// assert_eq!(next_state(Encoding::Binary, 1, 1), -1);
/// // Aging: survivors grow older, capped at 3
/// assert_eq!(next_state(Encoding::Aging, 2, 2), 3);
/// assert_eq!(next_state(Encoding::Aging, 3, 3), 3);
/// ```
pub fn next_state(encoding: Encoding, state: CellState, live_neighbors: u8) -> CellState {
    let alive = is_alive(state);
    let born = !alive && live_neighbors == BIRTH;
    let survives = alive && (SURVIVE_MIN..=SURVIVE_MAX).contains(&live_neighbors);

    match encoding {
        Encoding::Binary => {
            if born || survives {
                ALIVE
            } else if alive {
                JUST_DIED
            } else {
                DEAD
            }
        }
        Encoding::Aging => {
            if born {
                // Dead history flips sign toward alive.
                if state == DEAD {
                    ALIVE
                } else {
                    -state
                }
            } else if survives {
                (state + 1).min(MAX_AGE)
            } else if alive {
                -state
            } else if state < DEAD {
                state + 1
            } else {
                DEAD
            }
        }
    }
}

/// Compute the successor generation.
pub fn step(grid: &Grid, encoding: Encoding) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let state = grid.get(x, y).unwrap_or(DEAD);
            let n = grid.live_neighbors(x, y);
            next.set(x, y, next_state(encoding, state, n));
        }
    }
    next
}

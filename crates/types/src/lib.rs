//! Core types module - shared cell-state values and constants
//!
//! This module defines the fundamental types used throughout the simulator.
//! All types are pure data with no external dependencies, so they can be used
//! from the rule engine, the terminal view, and the configuration layer alike.
//!
//! # Cell States
//!
//! A cell is a small signed integer. Only strictly positive values count as
//! alive when neighbors are counted; the sign and magnitude carry history that
//! is used purely for glyph selection.
//!
//! | Encoding | Values | Meaning |
//! |----------|--------|---------|
//! | `Binary` | -1, 0, 1 | just died, dead, alive |
//! | `Aging`  | -3..=-1, 0, 1..=3 | decaying, dead, aging alive |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INTERVAL_MS` | 1000 | Pause between generations |
//! | `MIN_INTERVAL_MS` | 100 | Shortest allowed pause; smaller values are raised to it |
//! | `DEFAULT_GENERATIONS` | 1000 | Number of successor steps before exit |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{is_alive, Encoding, ALIVE, DEAD, JUST_DIED};
//!
//! assert!(is_alive(ALIVE));
//! assert!(!is_alive(JUST_DIED));
//! assert!(!is_alive(DEAD));
//!
//! let enc = Encoding::from_str("Aging").unwrap();
//! assert_eq!(enc, Encoding::Aging);
//! assert_eq!(enc.seed_state(), 3);
//! ```

/// A single cell's state value.
///
/// Strictly positive means alive. See [`Encoding`] for the value ranges.
pub type CellState = i8;

/// Dead cell with no remaining history.
pub const DEAD: CellState = 0;

/// Freshly born (or binary-alive) cell.
pub const ALIVE: CellState = 1;

/// Binary-encoding marker for a cell that died in the last step.
pub const JUST_DIED: CellState = -1;

/// Magnitude cap for the aging encoding.
pub const MAX_AGE: CellState = 3;

/// Pause between generations in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Shortest pause between generations in milliseconds.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Number of successor generations computed before the program exits.
pub const DEFAULT_GENERATIONS: u32 = 1000;

/// Whether a state value counts as alive for neighbor counting.
#[inline(always)]
pub fn is_alive(state: CellState) -> bool {
    state > 0
}

/// Cell-state encoding.
///
/// Both encodings follow the same B3/S23 rule; they only differ in how much
/// history a cell carries between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// `{-1, 0, 1}`: just died, dead, alive.
    #[default]
    Binary,
    /// `{-3..=-1, 0, 1..=3}`: magnitude counts consecutive generations, capped at 3.
    Aging,
}

impl Encoding {
    /// Parse encoding from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::Encoding;
    ///
    /// assert_eq!(Encoding::from_str("binary"), Some(Encoding::Binary));
    /// assert_eq!(Encoding::from_str("AGING"), Some(Encoding::Aging));
    /// assert_eq!(Encoding::from_str("age"), Some(Encoding::Aging));
    /// assert_eq!(Encoding::from_str("ternary"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "binary" | "bin" => Some(Encoding::Binary),
            "aging" | "age" => Some(Encoding::Aging),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Aging => "aging",
        }
    }

    /// State written into seeded cells.
    ///
    /// Aging seeds start at full magnitude so the initial pattern renders with
    /// the "old" glyph.
    pub fn seed_state(&self) -> CellState {
        match self {
            Encoding::Binary => ALIVE,
            Encoding::Aging => MAX_AGE,
        }
    }

    /// Whether `state` is one of the enumerated values of this encoding.
    pub fn is_valid_state(&self, state: CellState) -> bool {
        match self {
            Encoding::Binary => (JUST_DIED..=ALIVE).contains(&state),
            Encoding::Aging => (-MAX_AGE..=MAX_AGE).contains(&state),
        }
    }

    /// All enumerated state values, ascending.
    pub fn states(&self) -> &'static [CellState] {
        match self {
            Encoding::Binary => &[-1, 0, 1],
            Encoding::Aging => &[-3, -2, -1, 0, 1, 2, 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_timing_defaults() {
        assert_eq!(DEFAULT_INTERVAL_MS, 1000);
        assert_eq!(MIN_INTERVAL_MS, 100);
        assert_eq!(DEFAULT_GENERATIONS, 1000);
        assert_eq!(MAX_AGE, 3);
    }

    #[test]
    fn only_positive_states_are_alive() {
        for s in Encoding::Aging.states() {
            assert_eq!(is_alive(*s), *s > 0, "state {s}");
        }
    }

    #[test]
    fn encoding_round_trips_through_name() {
        for enc in [Encoding::Binary, Encoding::Aging] {
            assert_eq!(Encoding::from_str(enc.as_str()), Some(enc));
        }
    }

    #[test]
    fn valid_states_match_enumeration() {
        for enc in [Encoding::Binary, Encoding::Aging] {
            for s in -5..=5 {
                assert_eq!(enc.is_valid_state(s), enc.states().contains(&s));
            }
        }
    }
}

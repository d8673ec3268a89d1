//! Glyph table: maps a cell state to the character drawn for it.
//!
//! The mapping is total. Any value an encoding does not enumerate renders as
//! a blank, same as a dead cell.

use crate::fb::{Rgb, Style};
use crate::types::{CellState, Encoding};

/// Glyph for `state` under `encoding`.
///
/// # Examples
///
/// ```
/// use tui_life_term::glyph;
/// use tui_life_types::Encoding;
///
/// assert_eq!(glyph(Encoding::Binary, 1), '■');
/// assert_eq!(glyph(Encoding::Aging, -2), '○');
/// assert_eq!(glyph(Encoding::Aging, 9), ' ');
/// ```
pub fn glyph(encoding: Encoding, state: CellState) -> char {
    match encoding {
        Encoding::Binary => match state {
            1 => '■',
            -1 => '▫',
            _ => ' ',
        },
        Encoding::Aging => match state {
            -3 => '□',
            -2 => '○',
            -1 => '▫',
            1 => '▪',
            2 => '●',
            3 => '■',
            _ => ' ',
        },
    }
}

/// Style for `state`: alive cells brighten with age, dead history dims.
pub fn style(state: CellState) -> Style {
    match state {
        1 => Style {
            fg: Rgb::new(170, 235, 170),
            bold: false,
            dim: false,
        },
        2 => Style {
            fg: Rgb::new(110, 220, 120),
            bold: false,
            dim: false,
        },
        s if s >= 3 => Style {
            fg: Rgb::new(60, 200, 90),
            bold: true,
            dim: false,
        },
        s if s < 0 => Style {
            fg: Rgb::new(110, 110, 120),
            bold: false,
            dim: true,
        },
        _ => Style::PLAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_aging_state_has_distinct_glyph() {
        let glyphs: Vec<char> = Encoding::Aging
            .states()
            .iter()
            .map(|&s| glyph(Encoding::Aging, s))
            .collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn dead_is_blank_in_both_encodings() {
        assert_eq!(glyph(Encoding::Binary, 0), ' ');
        assert_eq!(glyph(Encoding::Aging, 0), ' ');
    }

    #[test]
    fn unenumerated_states_are_blank() {
        for s in [i8::MIN, -4, 2, 3, 4, i8::MAX] {
            assert_eq!(glyph(Encoding::Binary, s), ' ', "binary {s}");
        }
        for s in [i8::MIN, -4, 4, i8::MAX] {
            assert_eq!(glyph(Encoding::Aging, s), ' ', "aging {s}");
        }
    }

    #[test]
    fn decaying_cells_are_dimmed() {
        assert!(style(-1).dim);
        assert!(style(-3).dim);
        assert!(!style(1).dim);
        assert!(style(3).bold);
    }
}

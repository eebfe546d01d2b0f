//! Square index type and the fixed shading of the grid.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;
use crate::board::error::SquareError;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = 64;

/// Squares per row.
pub const BOARD_WIDTH: usize = 8;

static SHADES: Lazy<[Color; SQUARE_COUNT]> = Lazy::new(|| {
    let mut shades = [Color::White; SQUARE_COUNT];
    for (idx, shade) in shades.iter_mut().enumerate() {
        if (idx / BOARD_WIDTH + idx % BOARD_WIDTH) % 2 == 1 {
            *shade = Color::Black;
        }
    }
    shades
});

/// Index of a square in row-major order (0 = top left, 63 = bottom right).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct SquareIdx(u8);

impl SquareIdx {
    /// Create a new index with bounds checking
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(SquareIdx(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Some(SquareIdx((row * BOARD_WIDTH + col) as u8))
        } else {
            None
        }
    }

    /// All 64 indices in row-major order
    pub fn all() -> impl Iterator<Item = SquareIdx> {
        (0..SQUARE_COUNT as u8).map(SquareIdx)
    }

    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_WIDTH
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_WIDTH
    }

    /// Shade of the square: white when `row + col` is even, black otherwise
    #[inline]
    #[must_use]
    pub fn shade(self) -> Color {
        SHADES[self.as_usize()]
    }
}

impl fmt::Display for SquareIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SquareIdx> for usize {
    fn from(idx: SquareIdx) -> usize {
        idx.as_usize()
    }
}

impl TryFrom<usize> for SquareIdx {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        SquareIdx::new(index).ok_or(SquareError::OutOfBounds { index })
    }
}

impl FromStr for SquareIdx {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index = s
            .trim()
            .parse::<usize>()
            .map_err(|_| SquareError::InvalidNotation {
                notation: s.to_string(),
            })?;
        SquareIdx::try_from(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(SquareIdx::new(63).is_some());
        assert!(SquareIdx::new(64).is_none());
        assert_eq!(
            SquareIdx::try_from(99usize),
            Err(SquareError::OutOfBounds { index: 99 })
        );
    }

    #[test]
    fn test_row_col() {
        let idx = SquareIdx::new(19).unwrap();
        assert_eq!(idx.row(), 2);
        assert_eq!(idx.col(), 3);
        assert_eq!(SquareIdx::from_row_col(2, 3), Some(idx));
        assert_eq!(SquareIdx::from_row_col(8, 0), None);
    }

    #[test]
    fn test_shade_alternates() {
        assert_eq!(SquareIdx::new(0).unwrap().shade(), Color::White);
        assert_eq!(SquareIdx::new(1).unwrap().shade(), Color::Black);
        // Each row starts on the opposite shade of the previous one
        assert_eq!(SquareIdx::new(8).unwrap().shade(), Color::Black);
        assert_eq!(SquareIdx::new(63).unwrap().shade(), Color::White);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("12".parse::<SquareIdx>(), Ok(SquareIdx::new(12).unwrap()));
        assert!(matches!(
            "x".parse::<SquareIdx>(),
            Err(SquareError::InvalidNotation { .. })
        ));
        assert!(matches!(
            "64".parse::<SquareIdx>(),
            Err(SquareError::OutOfBounds { index: 64 })
        ));
    }

    #[test]
    fn test_all_in_order() {
        let all: Vec<usize> = SquareIdx::all().map(SquareIdx::as_usize).collect();
        assert_eq!(all, (0..64).collect::<Vec<_>>());
    }
}

//! Fixed array of 64 piece slots.

use std::ops::Index;

use super::{Color, Piece, SquareIdx, SQUARE_COUNT};
use crate::board::error::PropError;

/// Board contents: one optional piece per square, in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pieces([Option<Piece>; SQUARE_COUNT]);

impl Default for Pieces {
    fn default() -> Self {
        Self::empty()
    }
}

impl Pieces {
    #[must_use]
    pub const fn empty() -> Self {
        Pieces([None; SQUARE_COUNT])
    }

    /// Standard opening: men on the black squares of the first and last
    /// three rows, black at the top.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut pieces = Self::empty();
        for idx in SquareIdx::all() {
            if idx.shade() != Color::Black {
                continue;
            }
            match idx.row() {
                0..=2 => pieces.set(idx, Some(Piece::man(Color::Black))),
                5..=7 => pieces.set(idx, Some(Piece::man(Color::White))),
                _ => {}
            }
        }
        pieces
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: SquareIdx) -> Option<Piece> {
        self.0[idx.as_usize()]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, idx: SquareIdx) -> bool {
        self.0[idx.as_usize()].is_some()
    }

    pub fn set(&mut self, idx: SquareIdx, piece: Option<Piece>) {
        self.0[idx.as_usize()] = piece;
    }

    /// Number of occupied squares
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Slots paired with their index
    pub fn iter(&self) -> impl Iterator<Item = (SquareIdx, Option<Piece>)> + '_ {
        SquareIdx::all().zip(self.0.iter().copied())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Option<Piece>] {
        &self.0
    }
}

impl Index<SquareIdx> for Pieces {
    type Output = Option<Piece>;

    fn index(&self, idx: SquareIdx) -> &Self::Output {
        &self.0[idx.as_usize()]
    }
}

impl From<[Option<Piece>; SQUARE_COUNT]> for Pieces {
    fn from(slots: [Option<Piece>; SQUARE_COUNT]) -> Self {
        Pieces(slots)
    }
}

impl TryFrom<&[Option<Piece>]> for Pieces {
    type Error = PropError;

    fn try_from(slots: &[Option<Piece>]) -> Result<Self, Self::Error> {
        let slots: [Option<Piece>; SQUARE_COUNT] = slots
            .try_into()
            .map_err(|_| PropError::SlotCount { found: slots.len() })?;
        Ok(Pieces(slots))
    }
}

impl TryFrom<Vec<Option<Piece>>> for Pieces {
    type Error = PropError;

    fn try_from(slots: Vec<Option<Piece>>) -> Result<Self, Self::Error> {
        Pieces::try_from(slots.as_slice())
    }
}

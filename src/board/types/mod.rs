//! Core board types.
//!
//! - `Color`, `Kind` and `Piece` - occupants and side colors
//! - `SquareIdx` - checked row-major square index
//! - `Pieces` - the 64 piece slots of a board

mod piece;
mod pieces;
mod square;

pub use piece::{Color, Kind, Piece};
pub use pieces::Pieces;
pub use square::{SquareIdx, BOARD_WIDTH, SQUARE_COUNT};

//! Checkers board data model.
//!
//! Holds the values the view layer renders: pieces and their colors, the
//! 64 square slots, and the single-square selection state machine.
//!
//! # Example
//! ```
//! use checkers_ui::board::{Color, Pieces, Selection, SquareIdx};
//!
//! let pieces = Pieces::starting_position();
//! let mut selection = Selection::new();
//! let idx = SquareIdx::new(1).unwrap();
//! selection.click(idx, pieces.is_occupied(idx));
//! assert_eq!(selection.selected(), Some(idx));
//! assert_eq!(idx.shade(), Color::Black);
//! ```

mod error;
mod selection;
mod types;

pub use error::{ParseError, PropError, SquareError};
pub use selection::{Selection, Transition};
pub use types::{Color, Kind, Piece, Pieces, SquareIdx, BOARD_WIDTH, SQUARE_COUNT};

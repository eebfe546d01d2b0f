//! View components for a checkers board.
//!
//! `Square` renders one cell; `Board` renders 64 of them and owns the
//! selection. Both are built through validating builders.
//!
//! # Example
//! ```
//! use checkers_ui::board::{Color, Piece, SquareIdx};
//! use checkers_ui::ui::Board;
//!
//! let idx = SquareIdx::new(5).unwrap();
//! let board = Board::builder()
//!     .piece(idx, Piece::man(Color::White))
//!     .turn("white")
//!     .build()
//!     .unwrap();
//!
//! board.render().square(5).unwrap().click();
//! assert!(board.render().square(5).unwrap().selected());
//! ```

mod board;
mod builder;
mod element;
mod square;

#[cfg(test)]
mod tests;

pub use board::{Board, BoardView};
pub use builder::{BoardBuilder, SquareBuilder};
pub use element::Element;
pub use square::{Callback, Square};

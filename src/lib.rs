pub mod board;
pub mod driver;
pub mod ui;

pub use board::{Color, Kind, Piece, Pieces, PropError, SquareIdx};
pub use ui::{Board, BoardView, Element, Square};

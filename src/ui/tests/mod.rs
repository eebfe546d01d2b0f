//! Component tests.
//!
//! Tests are organized into separate files by category:
//! - `render.rs` - Square and board render output
//! - `selection.rs` - Click-driven selection through rendered squares
//! - `validation.rs` - Prop validation failures
//! - `proptest.rs` - Property-based tests

mod render;

use crate::board::{Color, Piece, SquareIdx};
use crate::ui::{Board, BoardView, Square};

const WHITE_MAN: Piece = Piece::man(Color::White);

fn sq(i: usize) -> SquareIdx {
    SquareIdx::new(i).unwrap()
}

/// Board with a white man on each of `indices`, white to move
fn board_with(indices: &[usize]) -> Board {
    indices
        .iter()
        .fold(Board::builder().turn("white"), |b, &i| b.piece(sq(i), WHITE_MAN))
        .build()
        .unwrap()
}

/// Props of the square at `index` in a fresh render
fn props_for_square(board: &Board, index: usize) -> Square {
    let view: BoardView = board.render();
    assert_eq!(view.id(), "board");
    view.square(index).cloned().unwrap()
}

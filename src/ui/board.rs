//! 8x8 board component with single-square selection.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{BoardBuilder, Callback, Element, Square};
use crate::board::{Color, Pieces, Selection, SquareIdx, Transition};

/// A board of 64 squares. Pieces and turn are fixed at build time; the
/// selection changes as squares are clicked.
///
/// The selection is shared with the click handlers of every rendered
/// square, so a `BoardView` keeps working after the render call returns.
#[derive(Debug)]
pub struct Board {
    pieces: Pieces,
    turn: Color,
    selection: Arc<Mutex<Selection>>,
}

impl Board {
    /// Start building a board from raw props.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    pub(crate) fn new(pieces: Pieces, turn: Color) -> Self {
        Board {
            pieces,
            turn,
            selection: Arc::new(Mutex::new(Selection::new())),
        }
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &Pieces {
        &self.pieces
    }

    /// Side to move. Validated but not used to gate selection.
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn selected(&self) -> Option<SquareIdx> {
        self.selection.lock().selected()
    }

    /// Same effect as clicking the rendered square at `idx`.
    pub fn click(&self, idx: SquareIdx) -> Transition {
        let occupied = self.pieces.is_occupied(idx);
        self.selection.lock().click(idx, occupied)
    }

    /// Drop any selection.
    pub fn clear_selection(&self) {
        self.selection.lock().clear();
    }

    fn click_handler(&self, idx: SquareIdx) -> Callback {
        let selection = Arc::clone(&self.selection);
        let occupied = self.pieces.is_occupied(idx);
        Arc::new(move || {
            selection.lock().click(idx, occupied);
        })
    }

    /// Render the 64 squares in row-major order from the current state.
    #[must_use]
    pub fn render(&self) -> BoardView {
        let selected = self.selected();
        let squares = self
            .pieces
            .iter()
            .map(|(idx, piece)| {
                Square::from_parts(
                    idx.shade(),
                    piece,
                    selected == Some(idx),
                    Some(self.click_handler(idx)),
                )
            })
            .collect();
        BoardView { squares }
    }
}

/// One render of a board: the root container and its 64 squares.
#[derive(Clone, Debug)]
pub struct BoardView {
    squares: Vec<Square>,
}

impl BoardView {
    /// Marker carried by the root container.
    pub const ID: &'static str = "board";

    #[must_use]
    pub const fn id(&self) -> &'static str {
        Self::ID
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Square at `index`, or `None` when out of range
    #[must_use]
    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        Element::div("board")
            .with_id(Self::ID)
            .with_children(self.squares.iter().map(Square::render))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn sq(i: usize) -> SquareIdx {
        SquareIdx::new(i).unwrap()
    }

    fn board_with(indices: &[usize]) -> Board {
        let mut pieces = Pieces::empty();
        for &i in indices {
            pieces.set(sq(i), Some(Piece::man(Color::White)));
        }
        Board::new(pieces, Color::White)
    }

    #[test]
    fn test_view_has_64_squares() {
        let view = board_with(&[]).render();
        assert_eq!(view.id(), "board");
        assert_eq!(view.squares().len(), 64);
        assert!(view.square(64).is_none());
    }

    #[test]
    fn test_view_handler_outlives_render() {
        let board = board_with(&[9]);
        let view = board.render();
        view.square(9).unwrap().click();
        assert_eq!(board.selected(), Some(sq(9)));
        // The old view is a snapshot; a new render reflects the change
        assert!(!view.square(9).unwrap().selected());
        assert!(board.render().square(9).unwrap().selected());
    }

    #[test]
    fn test_direct_click() {
        let board = board_with(&[1, 3]);
        assert_eq!(board.click(sq(1)), Transition::Selected(sq(1)));
        assert_eq!(
            board.click(sq(3)),
            Transition::Moved {
                from: sq(1),
                to: sq(3)
            }
        );
        assert_eq!(board.click(sq(2)), Transition::Ignored);
        assert_eq!(board.selected(), Some(sq(3)));
        board.clear_selection();
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_element_root() {
        let el = board_with(&[0]).render().to_element();
        assert_eq!(el.id, Some("board"));
        assert_eq!(el.children.len(), 64);
        assert_eq!(el.children[0].children.len(), 1);
    }
}

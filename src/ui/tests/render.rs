use super::*;
use crate::board::{Kind, Pieces};
use crate::ui::SquareBuilder;

#[test]
fn test_empty_black_square() {
    let square = SquareBuilder::new().color("black").build().unwrap();
    assert_eq!(
        square.render().to_string(),
        "<div\n  className=\"square black\"\n/>"
    );
}

#[test]
fn test_empty_white_square() {
    let square = SquareBuilder::new().color("white").build().unwrap();
    assert_eq!(
        square.render().to_string(),
        "<div\n  className=\"square white\"\n/>"
    );
}

#[test]
fn test_empty_black_selected_square() {
    let square = SquareBuilder::new()
        .color("black")
        .selected(true)
        .build()
        .unwrap();
    assert_eq!(
        square.render().to_string(),
        "<div\n  className=\"square black selected\"\n/>"
    );
}

#[test]
fn test_pieces_on_white() {
    for piece in Piece::all() {
        let square = SquareBuilder::new()
            .color(Color::White)
            .piece(piece)
            .build()
            .unwrap();
        let expected = format!(
            "<div\n  className=\"square white\"\n>\n  <div\n    className=\"piece {}-piece {}\"\n  />\n</div>",
            piece.color, piece.kind
        );
        assert_eq!(square.render().to_string(), expected);
    }
}

#[test]
fn test_white_king_on_white() {
    let square = SquareBuilder::new()
        .color("white")
        .piece(Piece::new(Color::White, Kind::King))
        .build()
        .unwrap();
    let el = square.render();
    assert_eq!(el.class_name, "square white");
    assert_eq!(el.children.len(), 1);
    assert_eq!(el.children[0].class_name, "piece white-piece king");
    assert!(el.children[0].children.is_empty());
}

#[test]
fn test_empty_board_alternates() {
    let board = Board::builder()
        .pieces(Pieces::empty())
        .turn("white")
        .build()
        .unwrap();
    let view = board.render();
    assert_eq!(view.squares().len(), 64);
    for (i, square) in view.squares().iter().enumerate() {
        let (row, col) = (i / 8, i % 8);
        let expected = if (row + col) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        assert_eq!(square.color(), expected, "square {i}");
        assert!(square.piece().is_none());
        assert!(!square.selected());
        assert!(square.has_click_handler());
    }
}

#[test]
fn test_empty_board_snapshot_head() {
    let board = Board::builder().turn("white").build().unwrap();
    let text = board.render().to_element().to_string();
    let expected_head = "\
<div
  className=\"board\"
  id=\"board\"
>
  <div
    className=\"square white\"
  />
  <div
    className=\"square black\"
  />";
    assert!(text.starts_with(expected_head));
    assert!(text.ends_with("</div>"));
    assert_eq!(text.matches("className=\"square ").count(), 64);
}

#[test]
fn test_white_man_in_every_square() {
    for index in 0..64 {
        let board = board_with(&[index]);
        let view = board.render();
        for (i, square) in view.squares().iter().enumerate() {
            let expected = if i == index { Some(WHITE_MAN) } else { None };
            assert_eq!(square.piece(), expected, "square {i} with man on {index}");
        }
    }
}

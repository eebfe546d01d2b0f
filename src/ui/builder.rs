//! Fluent builders that validate component props.
//!
//! Props may be given as raw strings, the way an untyped caller would pass
//! them, or as typed values. Validation happens in `build()`.
//!
//! # Example
//! ```
//! use checkers_ui::board::{Color, Piece, SquareIdx};
//! use checkers_ui::ui::{BoardBuilder, SquareBuilder};
//!
//! let square = SquareBuilder::new()
//!     .color("white")
//!     .piece(Piece::man(Color::Black))
//!     .build()
//!     .unwrap();
//! assert_eq!(square.class_name(), "square white");
//!
//! let board = BoardBuilder::new()
//!     .piece(SquareIdx::new(2).unwrap(), Piece::man(Color::White))
//!     .turn(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 1);
//! ```

use std::sync::Arc;

use super::{Board, Callback, Square};
use crate::board::{Color, Piece, Pieces, PropError, SquareIdx, SQUARE_COUNT};

#[cfg(feature = "logging")]
fn report(e: PropError) -> PropError {
    log::warn!("{e}");
    e
}

#[cfg(not(feature = "logging"))]
fn report(e: PropError) -> PropError {
    e
}

/// Validate a required color-valued prop.
fn required_color(
    component: &'static str,
    prop: &'static str,
    value: Option<&str>,
) -> Result<Color, PropError> {
    let result = match value {
        None => Err(PropError::Missing { component, prop }),
        Some(raw) => raw.parse::<Color>().map_err(|e| PropError::InvalidValue {
            component,
            prop,
            value: e.found().to_string(),
            expected: Color::NAMES,
        }),
    };
    result.map_err(report)
}

/// Builder for a standalone `Square`.
#[derive(Clone, Default)]
pub struct SquareBuilder {
    color: Option<String>,
    piece: Option<Piece>,
    selected: bool,
    on_click: Option<Callback>,
}

impl SquareBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the square color. Accepts a `Color` or its name.
    #[must_use]
    pub fn color(mut self, color: impl ToString) -> Self {
        self.color = Some(color.to_string());
        self
    }

    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.piece = Some(piece);
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(on_click));
        self
    }

    /// Validate props and build the square.
    pub fn build(self) -> Result<Square, PropError> {
        let color = required_color("Square", "color", self.color.as_deref())?;
        Ok(Square::from_parts(
            color,
            self.piece,
            self.selected,
            self.on_click,
        ))
    }
}

/// Builder for a `Board`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    slots: Vec<Option<Piece>>,
    turn: Option<String>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder with all 64 slots empty and no turn.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            slots: vec![None; SQUARE_COUNT],
            turn: None,
        }
    }

    /// Create a builder from the standard opening, white to move.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::new()
            .pieces(Pieces::starting_position())
            .turn(Color::White)
    }

    /// Replace all slots.
    #[must_use]
    pub fn pieces(mut self, pieces: Pieces) -> Self {
        self.slots = pieces.as_slice().to_vec();
        self
    }

    /// Replace all slots from an unchecked sequence. Anything other than
    /// 64 slots is rejected by `build()`.
    #[must_use]
    pub fn slots(mut self, slots: impl IntoIterator<Item = Option<Piece>>) -> Self {
        self.slots = slots.into_iter().collect();
        self
    }

    /// Place a piece on a square.
    #[must_use]
    pub fn piece(mut self, square: SquareIdx, piece: Piece) -> Self {
        if let Some(slot) = self.slots.get_mut(square.as_usize()) {
            *slot = Some(piece);
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: SquareIdx) -> Self {
        if let Some(slot) = self.slots.get_mut(square.as_usize()) {
            *slot = None;
        }
        self
    }

    /// Set the side to move. Accepts a `Color` or its name.
    #[must_use]
    pub fn turn(mut self, turn: impl ToString) -> Self {
        self.turn = Some(turn.to_string());
        self
    }

    /// Validate props and build the board.
    pub fn build(self) -> Result<Board, PropError> {
        let turn = required_color("Board", "turn", self.turn.as_deref())?;
        let pieces = Pieces::try_from(self.slots).map_err(report)?;
        Ok(Board::new(pieces, turn))
    }
}

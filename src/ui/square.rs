//! Single board cell.

use std::fmt;
use std::sync::Arc;

use super::{Element, SquareBuilder};
use crate::board::{Color, Piece};

/// Click handler attached to a square.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A rendered-ready cell: shade, optional occupant, selected flag and
/// click handler. Holds no state of its own.
#[derive(Clone)]
pub struct Square {
    color: Color,
    piece: Option<Piece>,
    selected: bool,
    on_click: Option<Callback>,
}

impl Square {
    /// Start building a square from raw props.
    #[must_use]
    pub fn builder() -> SquareBuilder {
        SquareBuilder::new()
    }

    pub(crate) fn from_parts(
        color: Color,
        piece: Option<Piece>,
        selected: bool,
        on_click: Option<Callback>,
    ) -> Self {
        Square {
            color,
            piece,
            selected,
            on_click,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn selected(&self) -> bool {
        self.selected
    }

    #[must_use]
    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Class list of the cell, e.g. `square black selected`
    #[must_use]
    pub fn class_name(&self) -> String {
        if self.selected {
            format!("square {} selected", self.color)
        } else {
            format!("square {}", self.color)
        }
    }

    #[must_use]
    pub fn render(&self) -> Element {
        let el = Element::div(self.class_name());
        match self.piece {
            Some(piece) => el.with_child(Element::div(piece.class_name())),
            None => el,
        }
    }

    /// Invoke the click handler, if one was supplied.
    pub fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Square")
            .field("color", &self.color)
            .field("piece", &self.piece)
            .field("selected", &self.selected)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

//! Piece, kind and color types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ParseError;

/// Side colors. Also used for the shade of a square and for the turn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Accepted prop values, in the same order as `BOTH`
    pub const NAMES: &'static [&'static str] = &["white", "black"];

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(ParseError::InvalidColor {
                found: s.to_string(),
            }),
        }
    }
}

/// Piece kinds. A man is promoted to a king on reaching the far row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum Kind {
    Man,
    King,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Man, Kind::King];

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Man => "man",
            Kind::King => "king",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "man" => Ok(Kind::Man),
            "king" => Ok(Kind::King),
            _ => Err(ParseError::InvalidKind {
                found: s.to_string(),
            }),
        }
    }
}

/// An occupant of a square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece::new(color, Kind::Man)
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece::new(color, Kind::King)
    }

    /// Every color/kind combination
    #[must_use]
    pub fn all() -> impl Iterator<Item = Piece> {
        Color::BOTH
            .into_iter()
            .flat_map(|color| Kind::ALL.into_iter().map(move |kind| Piece::new(color, kind)))
    }

    /// Class list of the rendered piece, e.g. `piece white-piece man`
    #[must_use]
    pub fn class_name(self) -> String {
        format!("piece {}-piece {}", self.color, self.kind)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

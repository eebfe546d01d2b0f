//! Error types for board props and value parsing.

use std::fmt;

/// Error type for component prop validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropError {
    /// A required prop was not supplied
    Missing {
        component: &'static str,
        prop: &'static str,
    },
    /// A prop value outside its enumerated set
    InvalidValue {
        component: &'static str,
        prop: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
    /// Piece slots must number exactly 64
    SlotCount { found: usize },
}

impl fmt::Display for PropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropError::Missing { component, prop } => {
                write!(f, "Prop `{prop}` is required by `{component}` but was not supplied")
            }
            PropError::InvalidValue {
                component,
                prop,
                value,
                expected,
            } => {
                let allowed = expected
                    .iter()
                    .map(|v| format!("\"{v}\""))
                    .collect::<Vec<_>>()
                    .join(",");
                write!(
                    f,
                    "Invalid prop `{prop}` of value `{value}` supplied to `{component}`, expected one of [{allowed}]"
                )
            }
            PropError::SlotCount { found } => {
                write!(f, "Board needs exactly 64 piece slots, found {found}")
            }
        }
    }
}

impl std::error::Error for PropError {}

/// Error type for parsing colors and piece kinds from their names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of "white" or "black"
    InvalidColor { found: String },
    /// Not one of "man" or "king"
    InvalidKind { found: String },
}

impl ParseError {
    /// The rejected input.
    #[must_use]
    pub fn found(&self) -> &str {
        match self {
            ParseError::InvalidColor { found } | ParseError::InvalidKind { found } => found,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidColor { found } => {
                write!(f, "Invalid color '{found}', expected 'white' or 'black'")
            }
            ParseError::InvalidKind { found } => {
                write!(f, "Invalid piece kind '{found}', expected 'man' or 'king'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error type for square index failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    OutOfBounds { index: usize },
    /// Index text is not a number
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square index '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

//! Line-oriented text driver for a single board.
//!
//! Reads one command per line and writes results to an output stream and
//! errors to an error stream, so the loop can run over stdio or in tests.
//!
//! Commands: `new [white|black]`, `clear`, `click <index>`, `show`,
//! `grid`, `selected`, `quit`.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{Color, Kind, PropError, SquareError, SquareIdx, Transition, BOARD_WIDTH};
use crate::ui::{Board, BoardBuilder};

pub mod command;

use command::{parse_command, Command, DEFAULT_TURN};

/// Error type for driver input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Command word not recognised
    UnknownCommand { line: String },
    /// Command needs an argument that was not given
    MissingArgument { command: &'static str },
    /// Square index could not be used
    InvalidSquare(SquareError),
    /// Board props were rejected
    InvalidProp(PropError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::UnknownCommand { line } => write!(f, "Unknown command '{line}'"),
            DriverError::MissingArgument { command } => {
                write!(f, "Command '{command}' needs an argument")
            }
            DriverError::InvalidSquare(e) => write!(f, "Invalid square: {e}"),
            DriverError::InvalidProp(e) => write!(f, "Invalid board: {e}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<SquareError> for DriverError {
    fn from(e: SquareError) -> Self {
        DriverError::InvalidSquare(e)
    }
}

impl From<PropError> for DriverError {
    fn from(e: PropError) -> Self {
        DriverError::InvalidProp(e)
    }
}

/// Board state held across commands.
pub struct Session {
    board: Board,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start with an empty board, white to move.
    #[must_use]
    pub fn new() -> Self {
        Session {
            board: Board::new(Default::default(), DEFAULT_TURN),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply one command. Returns `Ok(false)` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, SessionError> {
        match cmd {
            Command::New(turn) => {
                let turn = turn.unwrap_or_else(|| DEFAULT_TURN.to_string());
                self.board = BoardBuilder::starting_position()
                    .turn(turn)
                    .build()
                    .map_err(DriverError::from)?;
            }
            Command::Clear => {
                self.board = Board::new(Default::default(), DEFAULT_TURN);
            }
            Command::Click(idx) => {
                let transition = self.board.click(idx);
                writeln!(out, "{}", describe(transition))?;
            }
            Command::Show => {
                writeln!(out, "{}", self.board.render().to_element())?;
            }
            Command::Grid => {
                write_grid(&self.board, out)?;
            }
            Command::Selected => match self.board.selected() {
                Some(idx) => writeln!(out, "selected {idx}")?,
                None => writeln!(out, "selected none")?,
            },
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

/// Failure while executing a command: bad input, or a broken output stream.
#[derive(Debug)]
pub enum SessionError {
    Input(DriverError),
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Input(e) => write!(f, "{e}"),
            SessionError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<DriverError> for SessionError {
    fn from(e: DriverError) -> Self {
        SessionError::Input(e)
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

fn describe(transition: Transition) -> String {
    match transition {
        Transition::Ignored => "ignored".to_string(),
        Transition::Selected(idx) => format!("selected {idx}"),
        Transition::Cleared(idx) => format!("cleared {idx}"),
        Transition::Moved { from, to } => format!("moved {from} {to}"),
    }
}

fn piece_char(board: &Board, idx: SquareIdx) -> char {
    match board.pieces().get(idx) {
        None => '.',
        Some(piece) => {
            let c = if piece.color == Color::White { 'w' } else { 'b' };
            if piece.kind == Kind::King {
                c.to_ascii_uppercase()
            } else {
                c
            }
        }
    }
}

/// Plain 8x8 grid, selected square in brackets, turn on the last line.
pub fn write_grid<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    let selected = board.selected();
    for row in 0..BOARD_WIDTH {
        let mut line = String::with_capacity(BOARD_WIDTH * 3);
        for col in 0..BOARD_WIDTH {
            let Some(idx) = SquareIdx::from_row_col(row, col) else {
                continue;
            };
            let c = piece_char(board, idx);
            if selected == Some(idx) {
                line.push('[');
                line.push(c);
                line.push(']');
            } else {
                line.push(' ');
                line.push(c);
                line.push(' ');
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out, "turn {}", board.turn())
}

/// Run the command loop until `quit` or end of input.
///
/// Input errors are reported on `err` and the loop continues.
pub fn run<R, W, E>(input: R, out: &mut W, err: &mut E) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = Session::new();

    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            None => continue,
            Some(Ok(cmd)) => cmd,
            Some(Err(e)) => {
                writeln!(err, "Error: {e}")?;
                continue;
            }
        };

        match session.execute(cmd, out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(SessionError::Input(e)) => writeln!(err, "Error: {e}")?,
            Err(SessionError::Io(e)) => return Err(e),
        }
        out.flush()?;
    }

    Ok(())
}

/// Run the command loop over stdin and stdout.
pub fn run_stdio() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

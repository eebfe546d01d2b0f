use crate::board::{Color, SquareIdx};

use super::DriverError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Standard opening, optionally with a turn other than white
    New(Option<String>),
    /// Empty board, white to move
    Clear,
    Click(SquareIdx),
    Show,
    Grid,
    Selected,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Result<Command, DriverError>> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let cmd = match parts[0] {
        "new" => Ok(Command::New(parts.get(1).map(|v| (*v).to_string()))),
        "clear" => Ok(Command::Clear),
        "click" => match parts.get(1) {
            Some(arg) => arg
                .parse::<SquareIdx>()
                .map(Command::Click)
                .map_err(DriverError::from),
            None => Err(DriverError::MissingArgument { command: "click" }),
        },
        "show" => Ok(Command::Show),
        "grid" => Ok(Command::Grid),
        "selected" => Ok(Command::Selected),
        "quit" => Ok(Command::Quit),
        _ => Err(DriverError::UnknownCommand {
            line: trimmed.to_string(),
        }),
    };

    Some(cmd)
}

/// Default turn for `new` when none is given.
pub(crate) const DEFAULT_TURN: Color = Color::White;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    #[test]
    fn test_blank_line() {
        assert!(parse_command("   ").is_none());
    }

    #[test]
    fn test_click() {
        assert_eq!(
            parse_command("click 17"),
            Some(Ok(Command::Click(SquareIdx::new(17).unwrap())))
        );
        assert_eq!(
            parse_command("click"),
            Some(Err(DriverError::MissingArgument { command: "click" }))
        );
        assert_eq!(
            parse_command("click 64"),
            Some(Err(DriverError::InvalidSquare(SquareError::OutOfBounds {
                index: 64
            })))
        );
    }

    #[test]
    fn test_new_with_turn() {
        assert_eq!(
            parse_command("new black"),
            Some(Ok(Command::New(Some("black".to_string()))))
        );
        assert_eq!(parse_command("new"), Some(Ok(Command::New(None))));
    }

    #[test]
    fn test_unknown() {
        assert!(matches!(
            parse_command("jump 3 4"),
            Some(Err(DriverError::UnknownCommand { .. }))
        ));
    }
}

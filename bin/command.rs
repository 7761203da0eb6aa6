use derive_more::{Display, Error};
use lib::chess::{Move, ParsePositionError, Position};
use std::str::FromStr;

/// A command typed at the terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Move(Move),
    Moves(Position),
    Undo,
    New,
    Quit,
}

/// The reason why parsing [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseCommandError {
    #[display(fmt = "unknown command `{_0}`, expected `<from> <to>`, `moves <square>`, `undo`, `new` or `quit`")]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "{_0}")]
    InvalidPosition(ParsePositionError),
}

impl From<ParsePositionError> for ParseCommandError {
    fn from(e: ParsePositionError) -> Self {
        ParseCommandError::InvalidPosition(e)
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = Vec::from_iter(s.split_whitespace());

        match words.as_slice() {
            ["quit" | "exit"] => Ok(Command::Quit),
            ["new"] => Ok(Command::New),
            ["undo"] => Ok(Command::Undo),
            ["moves", square] => Ok(Command::Moves(square.parse()?)),
            [whence, whither] => Ok(Command::Move(Move(whence.parse()?, whither.parse()?))),
            [m] if m.len() == 4 && m.is_char_boundary(2) => {
                let (whence, whither) = m.split_at(2);
                Ok(Command::Move(Move(whence.parse()?, whither.parse()?)))
            }
            _ => Err(ParseCommandError::Unknown(s.trim().into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_strategy::proptest;

    fn square() -> impl Strategy<Value = Position> {
        (0usize..64).prop_map(Position::from_index)
    }

    #[proptest]
    fn parses_a_pair_of_squares_as_a_move(
        #[strategy(square())] whence: Position,
        #[strategy(square())] whither: Position,
    ) {
        let cmd = format!("{whence} {whither}");
        assert_eq!(cmd.parse(), Ok(Command::Move(Move(whence, whither))));
    }

    #[proptest]
    fn parses_a_move_written_without_spaces(
        #[strategy(square())] whence: Position,
        #[strategy(square())] whither: Position,
    ) {
        let m = Move(whence, whither);
        assert_eq!(m.to_string().parse(), Ok(Command::Move(m)));
    }

    #[proptest]
    fn parses_a_request_for_legal_moves(#[strategy(square())] p: Position) {
        assert_eq!(format!("moves {p}").parse(), Ok(Command::Moves(p)));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("undo".parse(), Ok(Command::Undo));
        assert_eq!("  new ".parse(), Ok(Command::New));
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_invalid_squares() {
        assert_eq!(
            "e2 i4".parse::<Command>(),
            Err(ParseCommandError::InvalidPosition(ParsePositionError::InvalidFile))
        );

        assert_eq!(
            "moves e9".parse::<Command>(),
            Err(ParseCommandError::InvalidPosition(ParsePositionError::InvalidRank))
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(
            "castle kingside now".parse::<Command>(),
            Err(ParseCommandError::Unknown("castle kingside now".into()))
        );

        assert!("".parse::<Command>().is_err());
    }
}

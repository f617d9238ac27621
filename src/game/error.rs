use std::{error::Error, fmt};

use crate::game::pieces::Color;
use crate::game::square::BoardSquare;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChessError {
    InvalidSquare { notation: String },
    OutOfBounds { row: i32, col: i32 },
    InvalidColor { found: char },
    InvalidFen { reason: String },
    EmptySquare { square: BoardSquare },
    WrongTurn { color: Color },
    IllegalDestination { from: BoardSquare, to: BoardSquare },
    SelfCheck,
    MissingKing { color: Color },
    CheckDisabled,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSquare { notation } => write!(
                f,
                "squares must be between 'a1' and 'h8'. found '{notation}'"
            ),
            Self::OutOfBounds { row, col } => {
                write!(f, "rows and columns must be within 0..=7. found ({row}, {col})")
            }
            Self::InvalidColor { found } => {
                write!(f, "color chars must be 'w' or 'b'. found '{found}'")
            }
            Self::InvalidFen { reason } => write!(f, "invalid FEN: {reason}"),
            Self::EmptySquare { square } => {
                write!(f, "no piece at square {}", square.unparse())
            }
            Self::WrongTurn { color } => {
                write!(f, "{color:?} moved but it is not {color:?}'s turn")
            }
            Self::IllegalDestination { from, to } => write!(
                f,
                "the piece at {} cannot move to {}",
                from.unparse(),
                to.unparse()
            ),
            Self::SelfCheck => write!(f, "move would leave the mover's own king attacked"),
            Self::MissingKing { color } => write!(f, "position has no {color:?} king"),
            Self::CheckDisabled => {
                write!(f, "check queries are disabled on a checkless game")
            }
        }
    }
}

impl Error for ChessError {}

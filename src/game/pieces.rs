use std::collections::HashSet;
use std::ops::Not;

use strum_macros::{EnumCount, EnumIter, FromRepr};

use crate::game::error::ChessError;
use crate::game::square::BoardSquare;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Color {
    pub fn from_char(c: char) -> Result<Color, ChessError> {
        match c {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor { found: c }),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Row delta of a forward pawn step. White pawns move toward rank 8,
    /// which is row 0 as stored.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row of this color's pawn starting rank (rank 2 for White, rank 7 for
    /// Black).
    pub fn home_pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
pub enum PieceKind {
    Rook = 0,
    Bishop = 1,
    Knight = 2,
    King = 3,
    Queen = 4,
    Pawn = 5,
    /// Sentinel occupying every vacant cell, so board lookups never deal in
    /// missing values.
    Empty = 6,
}

impl PieceKind {
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn   => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook   => 'r',
            PieceKind::Queen  => 'q',
            PieceKind::King   => 'k',
            PieceKind::Empty  => '.',
        }
    }

    pub fn to_emoji(&self) -> char {
        // We change the color via Ansi codes
        match self {
            PieceKind::Pawn => '♟',
            PieceKind::Knight => '♞',
            PieceKind::Bishop => '♝',
            PieceKind::Rook => '♜',
            PieceKind::Queen => '♛',
            PieceKind::King => '♚',
            PieceKind::Empty => ' ',
        }
    }
}

/// One board cell: a piece kind, its color (None exactly for Empty), and the
/// cached set of squares it may currently move to. The cache is stale after
/// any board mutation until the next full recompute.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Option<Color>,
    pub legal_squares: HashSet<BoardSquare>,
    /// Pawns only: whether the two-square advance is still available. Stays
    /// false on construction; the position loader raises it for pawns found
    /// on their home rank, so custom positions never grant the double step
    /// to pawns placed mid-board.
    pub first_move: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color: Some(color),
            legal_squares: HashSet::new(),
            first_move: false,
        }
    }

    pub fn empty() -> Piece {
        Piece {
            kind: PieceKind::Empty,
            color: None,
            legal_squares: HashSet::new(),
            first_move: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        match self.color {
            Some(Color::White) => self.kind.to_char().to_ascii_uppercase(),
            _ => self.kind.to_char(),
        }
    }
}

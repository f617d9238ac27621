use strum::IntoEnumIterator;

use crate::game::error::ChessError;
use crate::game::pieces::{Color, Piece, PieceKind};
use crate::game::square::BoardSquare;

pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub type PieceBoard = [[Piece; 8]; 8];

/// The board plus game state, built from a FEN string. The castling,
/// en-passant and halfmove fields are carried as opaque tokens so positions
/// round-trip through the serializer, but they are never interpreted.
#[derive(Clone, Debug)]
pub struct Game {
    pub pieces: PieceBoard,
    pub turn: Color,
    /// When set, check and checkmate are not enforced and the related
    /// queries fail with CheckDisabled instead of answering.
    pub checkless: bool,
    pub fullmove_number: u32,
    castling: String,
    en_passant: String,
    halfmove: String,
}

impl Game {
    pub fn new(fen: Option<&str>, checkless: bool) -> Result<Game, ChessError> {
        let fen = fen.unwrap_or(DEFAULT_FEN);
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or_else(|| ChessError::InvalidFen {
            reason: "empty position string".to_string(),
        })?;

        let mut pieces: PieceBoard =
            std::array::from_fn(|_| std::array::from_fn(|_| Piece::empty()));

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen {
                reason: format!("expected 8 ranks, found {}", ranks.len()),
            });
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;

            for c in rank.chars() {
                // Numbers encode empty spaces
                if let Some(n) = c.to_digit(10) {
                    col += n as usize;
                    continue;
                }

                if col >= 8 {
                    return Err(ChessError::InvalidFen {
                        reason: format!("rank {} has more than 8 columns", 8 - row),
                    });
                }

                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };

                let kind = PieceKind::from_char(c.to_ascii_lowercase()).ok_or_else(|| {
                    ChessError::InvalidFen {
                        reason: format!("unrecognized piece letter '{}'", c),
                    }
                })?;

                pieces[row][col] = Piece::new(kind, color);
                col += 1;
            }

            if col != 8 {
                return Err(ChessError::InvalidFen {
                    reason: format!("rank {} sums to {} columns instead of 8", 8 - row, col),
                });
            }
        }

        let turn = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            _ => {
                return Err(ChessError::InvalidFen {
                    reason: "FEN contains invalid color".to_string(),
                });
            }
        };

        // Accepted positionally, never interpreted
        let castling = parts.next().unwrap_or("-").to_string();
        let en_passant = parts.next().unwrap_or("-").to_string();
        let halfmove = parts.next().unwrap_or("0").to_string();

        let fullmove_number =
            parts
                .next()
                .unwrap_or("1")
                .parse()
                .map_err(|_| ChessError::InvalidFen {
                    reason: "fullmove counter is not an integer".to_string(),
                })?;

        // The placement scan alone cannot tell a pawn that started on its
        // home rank from one that a custom position parked there, so the
        // double step is granted here and nowhere else.
        for color in Color::iter() {
            let row = color.home_pawn_row() as usize;
            for col in 0..8 {
                let piece = &mut pieces[row][col];
                if piece.kind == PieceKind::Pawn && piece.color == Some(color) {
                    piece.first_move = true;
                }
            }
        }

        let mut game = Game {
            pieces,
            turn,
            checkless,
            fullmove_number,
            castling,
            en_passant,
            halfmove,
        };

        if !checkless {
            for color in Color::iter() {
                game.king_square(color)?;
            }
        }

        game.recompute_all();

        Ok(game)
    }

    pub fn piece(&self, square: BoardSquare) -> &Piece {
        &self.pieces[square.row as usize][square.col as usize]
    }

    pub(crate) fn piece_mut(&mut self, square: BoardSquare) -> &mut Piece {
        &mut self.pieces[square.row as usize][square.col as usize]
    }

    pub fn piece_at(&self, square: BoardSquare) -> (PieceKind, Option<Color>) {
        let piece = self.piece(square);
        (piece.kind, piece.color)
    }

    pub fn has_pawn_at(&self, square: BoardSquare) -> bool {
        self.piece(square).kind == PieceKind::Pawn
    }

    pub fn piece_count(&self) -> usize {
        self.pieces
            .iter()
            .flatten()
            .filter(|piece| !piece.is_empty())
            .count()
    }

    pub fn king_square(&self, color: Color) -> Result<BoardSquare, ChessError> {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = BoardSquare { row, col };
                let piece = self.piece(square);
                if piece.kind == PieceKind::King && piece.color == Some(color) {
                    return Ok(square);
                }
            }
        }

        Err(ChessError::MissingKing { color })
    }

    /// Applies a move, all-or-nothing: any rejection leaves the game exactly
    /// as it was before the call.
    pub fn try_move(&mut self, from: BoardSquare, to: BoardSquare) -> Result<(), ChessError> {
        let color = match self.piece(from).color {
            Some(color) => color,
            None => return Err(ChessError::EmptySquare { square: from }),
        };

        if color != self.turn {
            return Err(ChessError::WrongTurn { color });
        }

        // A single move can change legality of arbitrarily distant pieces,
        // so destinations are refreshed board-wide before they are trusted.
        self.recompute_all();

        if !self.piece(from).legal_squares.contains(&to) {
            return Err(ChessError::IllegalDestination { from, to });
        }

        if !self.checkless && self.move_leaves_king_attacked(from, to)? {
            return Err(ChessError::SelfCheck);
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }

        let mut piece = std::mem::replace(self.piece_mut(from), Piece::empty());
        if piece.kind == PieceKind::Pawn {
            piece.first_move = false;
        }
        *self.piece_mut(to) = piece;

        self.recompute_all();
        self.turn = !self.turn;

        Ok(())
    }

    pub fn is_check(&self) -> Result<bool, ChessError> {
        if self.checkless {
            return Err(ChessError::CheckDisabled);
        }

        let king = self.king_square(self.turn)?;
        Ok(self.is_attacked(king, !self.turn))
    }

    /// Checkmate requires that no legal move of the side to move escapes the
    /// check, so every destination of every piece is tried on a scratch
    /// board.
    pub fn is_checkmate(&self) -> Result<bool, ChessError> {
        if !self.is_check()? {
            return Ok(false);
        }

        for row in 0..8u8 {
            for col in 0..8u8 {
                let from = BoardSquare { row, col };
                let piece = self.piece(from);

                if piece.color != Some(self.turn) {
                    continue;
                }

                for &to in &piece.legal_squares {
                    if !self.move_leaves_king_attacked(from, to)? {
                        return Ok(false);
                    }
                }
            }
        }

        Ok(true)
    }

    pub fn is_piece_under_attack(&self, square: BoardSquare) -> Result<bool, ChessError> {
        match self.piece(square).color {
            Some(color) => Ok(self.is_attacked(square, !color)),
            None => Err(ChessError::EmptySquare { square }),
        }
    }

    /// Plays the relocation on a clone and reports whether the side to move
    /// would end up with its king attacked.
    fn move_leaves_king_attacked(
        &self,
        from: BoardSquare,
        to: BoardSquare,
    ) -> Result<bool, ChessError> {
        let mut trial = self.clone();

        let piece = std::mem::replace(trial.piece_mut(from), Piece::empty());
        *trial.piece_mut(to) = piece;
        trial.recompute_all();

        let king = trial.king_square(self.turn)?;
        Ok(trial.is_attacked(king, !self.turn))
    }

    pub fn get_fen(&self) -> String {
        let mut placement = String::new();

        for row in 0..8 {
            if row > 0 {
                placement.push('/');
            }

            let mut empty_run = 0;
            for col in 0..8 {
                let piece = &self.pieces[row][col];

                if piece.is_empty() {
                    empty_run += 1;
                } else {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.fen_char());
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
        }

        format!(
            "{} {} {} {} {} {}",
            placement,
            self.turn.to_char(),
            self.castling,
            self.en_passant,
            self.halfmove,
            self.fullmove_number
        )
    }
}

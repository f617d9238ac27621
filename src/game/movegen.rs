use std::collections::HashSet;

use crate::game::board::Game;
use crate::game::error::ChessError;
use crate::game::pieces::{Color, PieceKind};
use crate::game::square::BoardSquare;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Game {
    /// The set of squares the piece on `square` may move to right now, given
    /// board occupancy. Captures of opposite-color pieces are included; own
    /// color blocks.
    pub fn legal_squares_of(&self, square: BoardSquare) -> Result<HashSet<BoardSquare>, ChessError> {
        let piece = self.piece(square);

        let color = match piece.color {
            Some(color) => color,
            None => return Err(ChessError::EmptySquare { square }),
        };

        Ok(match piece.kind {
            PieceKind::Rook => self.ray_squares(square, color, &ROOK_DIRECTIONS),
            PieceKind::Bishop => self.ray_squares(square, color, &BISHOP_DIRECTIONS),
            PieceKind::Queen => {
                let mut squares = self.ray_squares(square, color, &ROOK_DIRECTIONS);
                squares.extend(self.ray_squares(square, color, &BISHOP_DIRECTIONS));
                squares
            }
            PieceKind::Knight => self.offset_squares(square, color, &KNIGHT_OFFSETS),
            PieceKind::King => self.offset_squares(square, color, &KING_OFFSETS),
            PieceKind::Pawn => self.pawn_squares(square, color, piece.first_move),
            PieceKind::Empty => HashSet::new(),
        })
    }

    /// Refreshes every occupied square's cached destination set. Must run
    /// after any board mutation before attack queries are trusted.
    pub fn recompute_all(&mut self) {
        let mut computed = Vec::with_capacity(32);

        for row in 0..8u8 {
            for col in 0..8u8 {
                let square = BoardSquare { row, col };
                if let Ok(squares) = self.legal_squares_of(square) {
                    computed.push((square, squares));
                }
            }
        }

        for (square, squares) in computed {
            self.piece_mut(square).legal_squares = squares;
        }
    }

    /// Whether any `by`-colored piece's cached destination set contains
    /// `square`.
    pub fn is_attacked(&self, square: BoardSquare, by: Color) -> bool {
        self.pieces
            .iter()
            .flatten()
            .filter(|piece| piece.color == Some(by))
            .any(|piece| piece.legal_squares.contains(&square))
    }

    /// Outward scan along each direction independently: empty squares are
    /// emitted, an opposite-color occupant is emitted and ends the ray, a
    /// same-color occupant ends the ray without being emitted.
    fn ray_squares(
        &self,
        from: BoardSquare,
        color: Color,
        directions: &[(i32, i32)],
    ) -> HashSet<BoardSquare> {
        let mut squares = HashSet::new();

        for &(dr, dc) in directions {
            let mut distance = 1;

            while let Some(to) = from.offset(dr * distance, dc * distance) {
                match self.piece(to).color {
                    None => {
                        squares.insert(to);
                        distance += 1;
                    }
                    Some(occupant) if occupant != color => {
                        squares.insert(to);
                        break;
                    }
                    Some(_) => break,
                }
            }
        }

        squares
    }

    fn offset_squares(
        &self,
        from: BoardSquare,
        color: Color,
        offsets: &[(i32, i32)],
    ) -> HashSet<BoardSquare> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| self.piece(to).color != Some(color))
            .collect()
    }

    fn pawn_squares(
        &self,
        from: BoardSquare,
        color: Color,
        first_move: bool,
    ) -> HashSet<BoardSquare> {
        let mut squares = HashSet::new();
        let dir = color.forward();

        // The double step is only offered on top of a legal single step
        if let Some(step) = from.offset(dir, 0) {
            if self.piece(step).is_empty() {
                squares.insert(step);

                if first_move {
                    if let Some(jump) = from.offset(2 * dir, 0) {
                        if self.piece(jump).is_empty() {
                            squares.insert(jump);
                        }
                    }
                }
            }
        }

        // Diagonal captures only onto opposite-color occupants, never onto
        // empty squares (no en passant)
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dir, dc) {
                if let Some(occupant) = self.piece(to).color {
                    if occupant != color {
                        squares.insert(to);
                    }
                }
            }
        }

        squares
    }
}

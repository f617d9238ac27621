use crate::game::board::Game;
use crate::game::error::ChessError;
use crate::game::pieces::Color;
use crate::game::square::BoardSquare;

/// Owns the game and gives the display/CLI layer a string-only surface:
/// algebraic squares in, rendered boards and FEN strings out.
pub struct GameController {
    pub game: Game,
}

impl GameController {
    pub fn new(fen: Option<&str>, checkless: bool) -> Result<Self, ChessError> {
        Ok(Self {
            game: Game::new(fen, checkless)?,
        })
    }

    pub fn new_game(&mut self) -> Result<(), ChessError> {
        self.game = Game::new(None, self.game.checkless)?;
        Ok(())
    }

    pub fn new_game_from_fen(&mut self, fen: &str) -> Result<(), ChessError> {
        self.game = Game::new(Some(fen), self.game.checkless)?;
        Ok(())
    }

    pub fn try_move_piece(&mut self, from: &str, to: &str) -> Result<(), ChessError> {
        let from = BoardSquare::parse(from)?;
        let to = BoardSquare::parse(to)?;

        self.game.try_move(from, to)
    }

    pub fn legal_squares(&self, square: &str) -> Result<Vec<BoardSquare>, ChessError> {
        let square = BoardSquare::parse(square)?;

        let mut squares: Vec<BoardSquare> =
            self.game.legal_squares_of(square)?.into_iter().collect();
        squares.sort();

        Ok(squares)
    }

    pub fn print_with_moves(&self, possible_moves: Vec<&BoardSquare>) {
        const RESET: &str = "\x1b[0m";
        const LIGHT_SQUARE_BG: &str = "\x1b[48;5;172m";
        const DARK_SQUARE_BG: &str = "\x1b[48;5;130m";
        const WHITE_PIECE: &str = "\x1b[1;97m";
        const BLACK_PIECE: &str = "\x1b[1;30m";
        const MOVE_HIGHLIGHT: &str = "\x1b[1;34m";
        const HEADING_BG: &str = "\x1b[48;5;240m"; // Neutral gray background

        // Print centered heading with background
        let heading_text = match self.game.turn {
            Color::White => "White to move",
            Color::Black => "Black to move",
        };
        let heading_color = match self.game.turn {
            Color::White => WHITE_PIECE,
            Color::Black => BLACK_PIECE,
        };

        // Board width is 8 squares * 3 chars each = 24 chars
        let board_width = 24;
        let padding = (board_width - heading_text.len()) / 2;
        let total_padding = board_width - heading_text.len();
        let right_padding = total_padding - padding;

        println!(
            "{}{}{}{}{}{}",
            HEADING_BG,
            " ".repeat(padding),
            heading_color,
            heading_text,
            " ".repeat(right_padding),
            RESET
        );

        // Convert possible moves to a HashSet for O(1) lookup
        let move_squares: std::collections::HashSet<BoardSquare> =
            possible_moves.into_iter().copied().collect();

        for row in 0..8u8 {
            let mut line = String::new();
            for col in 0..8u8 {
                let square = BoardSquare { row, col };
                let is_light_square = (row + col) % 2 == 0;
                let bg_color = if is_light_square {
                    LIGHT_SQUARE_BG
                } else {
                    DARK_SQUARE_BG
                };
                line.push_str(bg_color);

                let piece = self.game.piece(square);
                match piece.color {
                    Some(color) => {
                        let piece_color = match color {
                            Color::White => WHITE_PIECE,
                            Color::Black => BLACK_PIECE,
                        };
                        line.push_str(&format!(
                            "{} {} {}",
                            piece_color,
                            piece.kind.to_emoji(),
                            RESET
                        ));
                    }
                    None => {
                        // Check if this square is a possible move
                        if move_squares.contains(&square) {
                            line.push_str(&format!("{} ● {}", MOVE_HIGHLIGHT, RESET));
                        } else {
                            line.push_str("   ");
                        }
                    }
                }

                line.push_str(RESET);
            }
            println!("{}", line);
        }
    }

    pub fn print(&self) {
        self.print_with_moves(vec![]);
    }

    pub fn print_fen(&self) {
        println!("{}", self.game.get_fen());
    }
}

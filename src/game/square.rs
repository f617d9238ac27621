use crate::game::error::ChessError;

/// A board coordinate. Row 0 is rank 8 (the top rank as stored), column 0 is
/// file 'a', so "a8" maps to (0, 0) and "h1" to (7, 7).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSquare {
    pub row: u8,
    pub col: u8,
}

impl BoardSquare {
    pub fn parse(string: &str) -> Result<BoardSquare, ChessError> {
        let mut chars = string.chars();

        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(BoardSquare {
                row: 7 - (rank as u8 - b'1'),
                col: file as u8 - b'a',
            }),
            (_, _, _) => Err(ChessError::InvalidSquare {
                notation: string.to_string(),
            }),
        }
    }

    pub fn from_coords(row: i32, col: i32) -> Result<BoardSquare, ChessError> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::OutOfBounds { row, col });
        }

        Ok(BoardSquare {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn unparse(&self) -> String {
        format!("{}{}", (self.col + b'a') as char, (b'8' - self.row) as char)
    }

    /// Steps by (delta row, delta column), returning None when the result
    /// would leave the board. Ray scans and offset enumeration rely on this
    /// for their bounds checks.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<BoardSquare> {
        BoardSquare::from_coords(self.row as i32 + dr, self.col as i32 + dc).ok()
    }
}

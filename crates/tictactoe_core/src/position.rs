use std::fmt;

pub const BOARD_SIZE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8, // 0-2, top to bottom
    pub col: u8, // 0-2, left to right
}

impl Position {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Parses `a1`..`c3`: column letter, then row number (row 1 is the top row).
    pub fn from_notation(notation: &str) -> Option<Self> {
        let mut chars = notation.chars();
        let (col, row) = match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => (col.to_ascii_lowercase(), row),
            _ => return None,
        };

        if !('a'..='c').contains(&col) || !('1'..='3').contains(&row) {
            return None;
        }

        Some(Self {
            row: (row as u8) - b'1',
            col: (col as u8) - b'a',
        })
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

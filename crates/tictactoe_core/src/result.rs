use crate::{Cell, Position};

const fn pos(row: u8, col: u8) -> Position {
    Position { row, col }
}

// Scan order matters: the first completed line is the one reported.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows, top to bottom
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    // Columns, left to right
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    // Main diagonal
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    // Anti-diagonal
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    Win { winner: Cell, line: [Position; 3] },
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    pub fn winner(&self) -> Option<Cell> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

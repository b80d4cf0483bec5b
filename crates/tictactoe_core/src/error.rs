use thiserror::Error;

/// Errors from building a board or game out of text or raw cells.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 9 cells, got {got}")]
    CellCount { got: usize },

    #[error("invalid cell character '{character}' at cell {index}")]
    InvalidCell { character: char, index: usize },

    #[error("invalid mark counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    MarkCounts { x_count: usize, o_count: usize },

    #[error("both sides have a completed line")]
    BothSidesWin,

    #[error("{winner} has a completed line but the mark counts say {winner} did not move last")]
    WinnerOutOfTurn { winner: char },
}

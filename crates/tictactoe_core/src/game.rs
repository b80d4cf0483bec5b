use std::str::FromStr;

use crate::{Board, Cell, GameResult, ParseError, Position};

/// Board plus turn order and the terminal flag.
///
/// `Clone` is a full deep copy, so the search can play out hypothetical
/// lines on its own copies without touching the caller's game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    current_player: Cell,
    game_over: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Cell::X,
            game_over: false,
        }
    }

    /// Builds a game from an arbitrary position, inferring whose turn it is.
    pub fn from_board(board: Board) -> Result<Self, ParseError> {
        let x_count = board.count(Cell::X);
        let o_count = board.count(Cell::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(ParseError::MarkCounts { x_count, o_count });
        }

        let x_won = board.has_line(Cell::X);
        let o_won = board.has_line(Cell::O);
        if x_won && o_won {
            return Err(ParseError::BothSidesWin);
        }
        // The winner must be the side that moved last
        if x_won && x_count == o_count {
            return Err(ParseError::WinnerOutOfTurn { winner: 'X' });
        }
        if o_won && x_count != o_count {
            return Err(ParseError::WinnerOutOfTurn { winner: 'O' });
        }

        let last_mover = if x_count > o_count { Cell::X } else { Cell::O };
        let mut game = Self {
            board,
            current_player: last_mover.opponent(),
            game_over: false,
        };

        if game.evaluate_result().is_terminal() {
            // Turn does not advance past the move that ended the game
            game.current_player = last_mover;
            game.game_over = true;
        }

        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Cell {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn move_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Returns `false` and leaves the game untouched if the game is over, the
    /// coordinates are off the board or the square is taken.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let pos = match (u8::try_from(row), u8::try_from(col)) {
            (Ok(row), Ok(col)) => Position::new(row, col),
            _ => None,
        };

        match pos {
            Some(pos) => self.apply(pos),
            None => false,
        }
    }

    pub fn apply(&mut self, pos: Position) -> bool {
        // Fields are public, so re-check the bounds
        if self.game_over || Position::new(pos.row, pos.col).is_none() {
            return false;
        }
        if !self.board.get(pos).is_empty() {
            return false;
        }

        self.board.set(pos, self.current_player);

        if self.evaluate_result().is_terminal() {
            self.game_over = true;
        } else {
            self.current_player = self.current_player.opponent();
        }

        true
    }

    /// Read-only scan: rows, then columns, then the main diagonal, then the
    /// anti-diagonal. A full board with no line is a draw.
    pub fn evaluate_result(&self) -> GameResult {
        if let Some((winner, line)) = self.board.find_winning_line() {
            return GameResult::Win { winner, line };
        }

        if self.board.is_full() {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Empty squares in row-major order; empty once the board is full.
    pub fn available_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> Game {
        self.clone()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_board(s.parse()?)
    }
}

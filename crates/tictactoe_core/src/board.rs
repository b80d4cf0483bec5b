use std::fmt;
use std::str::FromStr;

use crate::{result::WINNING_LINES, Cell, ParseError, Position};

/// The 3x3 grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn filled_count(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Empty squares in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.get(pos).is_empty()).collect()
    }

    /// First completed line in scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn find_winning_line(&self) -> Option<(Cell, [Position; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let first = self.get(line[0]);
            if !first.is_empty() && line[1..].iter().all(|&pos| self.get(pos) == first) {
                Some((first, line))
            } else {
                None
            }
        })
    }

    /// Whether `mark` owns any complete line, regardless of scan order.
    pub fn has_line(&self, mark: Cell) -> bool {
        !mark.is_empty()
            && WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&pos| self.get(pos) == mark))
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Nine cells of `X`, `O` or `.`/`_`/`-`; whitespace and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if symbols.len() != 9 {
            return Err(ParseError::CellCount { got: symbols.len() });
        }

        let mut board = Board::new();
        for (index, (&character, pos)) in symbols.iter().zip(Position::all()).enumerate() {
            let cell = Cell::from_char(character)
                .ok_or(ParseError::InvalidCell { character, index })?;
            board.set(pos, cell);
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

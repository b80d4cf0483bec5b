//! Who fills each side: someone at the keyboard or a computer tier.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use rand::Rng;
use tictactoe_core::{Cell, Game, Position};
use tictactoe_engine::{Difficulty, TicTacToeAI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Types squares such as `b2` on stdin.
    Human,
    Computer(TicTacToeAI),
}

impl Player {
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    /// Next square for `side`. Humans are asked until they name a free square.
    pub fn next_move<R, W, G>(
        &self,
        game: &Game,
        side: Cell,
        input: &mut R,
        output: &mut W,
        rng: &mut G,
    ) -> Result<Position>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        match self {
            Player::Human => read_move(game, side, input, output),
            Player::Computer(ai) => {
                // The search only ever sees a snapshot of the live game
                let snapshot = game.snapshot();
                ai.select_move(&snapshot, side, rng)
                    .ok_or_else(|| anyhow!("{} found no move on an unfinished board", side))
            }
        }
    }
}

fn read_move<R: BufRead, W: Write>(
    game: &Game,
    side: Cell,
    input: &mut R,
    output: &mut W,
) -> Result<Position> {
    let mut line = String::new();
    loop {
        write!(output, "{} to move (a1-c3): ", side)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before {} moved", side);
        }

        match Position::from_notation(line.trim()) {
            Some(pos) if game.board().get(pos).is_empty() => return Ok(pos),
            Some(pos) => writeln!(output, "{} is already taken", pos)?,
            None => writeln!(output, "'{}' is not a square; try something like b2", line.trim())?,
        }
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            return Ok(Player::Human);
        }
        let difficulty: Difficulty = s
            .parse()
            .map_err(|_| anyhow!("unknown player '{}' (expected human, easy, medium or hard)", s))?;
        Ok(Player::Computer(TicTacToeAI::new(difficulty)))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => f.write_str("human"),
            Player::Computer(ai) => write!(f, "{} AI", ai.difficulty()),
        }
    }
}

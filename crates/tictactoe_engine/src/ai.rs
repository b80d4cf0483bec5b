use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use tictactoe_core::{Cell, Game, Position};

use crate::search::best_move;
use crate::Difficulty;

// Chance that a Medium player searches instead of moving at random
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.5;

/// Computer opponent. Holds only its tier; randomness comes from the
/// caller's RNG on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToeAI {
    difficulty: Difficulty,
}

impl TicTacToeAI {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a square for `side` without touching `game`.
    ///
    /// Returns `None` if the game is already decided or the board is full.
    /// Easy and Medium draw from `rng`; Hard never touches it.
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        game: &Game,
        side: Cell,
        rng: &mut R,
    ) -> Option<Position> {
        if side.is_empty() {
            warn!("Asked to pick a move for an empty side");
            return None;
        }
        if game.is_game_over() {
            return None;
        }

        let moves = game.available_moves();
        if moves.is_empty() {
            return None;
        }

        let chosen = match self.difficulty {
            Difficulty::Easy => moves.choose(rng).copied(),
            Difficulty::Medium => {
                // One coin flip per call, never per ply
                if rng.gen_bool(MEDIUM_OPTIMAL_PROBABILITY) {
                    best_move(game, side)
                } else {
                    moves.choose(rng).copied()
                }
            }
            Difficulty::Hard => best_move(game, side),
        };

        if let Some(mv) = chosen {
            debug!("{} AI playing {} chose {}", self.difficulty, side, mv);
        }
        chosen
    }
}

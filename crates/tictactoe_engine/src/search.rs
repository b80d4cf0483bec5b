// Exhaustive minimax over private copies of the game. No pruning and no
// cache: the whole tree is small enough to walk every time.
use log::trace;
use rayon::prelude::*;
use tictactoe_core::{Cell, Game, GameResult, Position};

// Terminal scores are offset by depth so quicker wins and slower losses rank higher
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// Scores `game` for `side`. `depth` counts plies below the root move and
/// `maximizing` says whether the side to play at this node picks the max.
pub fn minimax(game: &Game, depth: i32, maximizing: bool, side: Cell) -> i32 {
    match game.evaluate_result() {
        GameResult::Win { winner, .. } => {
            return if winner == side {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        GameResult::Draw => return DRAW_SCORE,
        GameResult::Ongoing => {}
    }

    let children = game.available_moves().into_iter().map(|mv| {
        let mut next = game.clone();
        next.apply(mv);
        minimax(&next, depth + 1, !maximizing, side)
    });

    if maximizing {
        children.fold(i32::MIN, i32::max)
    } else {
        children.fold(i32::MAX, i32::min)
    }
}

/// Score of every legal root move for `side`, in row-major order.
///
/// Each root move is played on its own copy and scored with the opponent
/// to reply, starting again from depth 0.
pub fn score_moves(game: &Game, side: Cell) -> Vec<(Position, i32)> {
    game.available_moves()
        .into_par_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply(mv);
            (mv, minimax(&next, 0, false, side))
        })
        .collect()
}

/// The optimal move for `side`, or `None` when no square is free.
///
/// Ties go to the first move in row-major order; a later move only replaces
/// the current best on a strictly higher score.
pub fn best_move(game: &Game, side: Cell) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for (mv, score) in score_moves(game, side) {
        trace!("Root move {} scores {}", mv, score);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
    }

    best.map(|(mv, _)| mv)
}

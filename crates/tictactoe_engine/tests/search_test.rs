//! Strength of the Hard tier, checked against the full game tree

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tictactoe_core::{Cell, Game, GameResult, Position};
use tictactoe_engine::{best_move, Difficulty, TicTacToeAI};

fn play_out(mut game: Game, x: TicTacToeAI, o: TicTacToeAI, rng: &mut StdRng) -> GameResult {
    while !game.is_game_over() {
        let side = game.current_player();
        let ai = if side == Cell::X { x } else { o };
        let mv = ai.select_move(&game, side, rng).expect("ongoing game has a move");
        assert!(game.apply(mv));
    }
    game.evaluate_result()
}

fn opponent_can_win_next(game: &Game) -> bool {
    if game.is_game_over() {
        return false;
    }
    let side = game.current_player();
    game.available_moves().into_iter().any(|mv| {
        let mut next = game.clone();
        next.apply(mv);
        next.evaluate_result().winner() == Some(side)
    })
}

fn is_safe(game: &Game, mv: Position) -> bool {
    let mut next = game.clone();
    next.apply(mv);
    !opponent_can_win_next(&next)
}

fn reachable_positions() -> Vec<Game> {
    let mut seen = HashSet::new();
    let mut frontier = vec![Game::new()];
    while let Some(game) = frontier.pop() {
        if game.is_game_over() || !seen.insert(game.clone()) {
            continue;
        }
        for mv in game.available_moves() {
            let mut next = game.clone();
            next.apply(mv);
            frontier.push(next);
        }
    }
    seen.into_iter().collect()
}

#[test]
fn hard_self_play_is_a_draw() {
    let hard = TicTacToeAI::new(Difficulty::Hard);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(play_out(Game::new(), hard, hard, &mut rng), GameResult::Draw);
}

#[test]
fn hard_self_play_draws_after_any_opening() {
    for opening in Position::all() {
        let mut game = Game::new();
        game.apply(opening);
        let hard = TicTacToeAI::new(Difficulty::Hard);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(play_out(game, hard, hard, &mut rng), GameResult::Draw, "opening {}", opening);
    }
}

#[test]
fn hard_never_hands_over_an_immediate_win() {
    for game in reachable_positions().into_iter().filter(|g| g.move_count() > 0) {
        let side = game.current_player();
        let moves = game.available_moves();
        if !moves.iter().any(|&mv| is_safe(&game, mv)) {
            continue;
        }
        let chosen = best_move(&game, side).unwrap();
        assert!(
            is_safe(&game, chosen),
            "{} chose {} in\n{}",
            side,
            chosen,
            game.board()
        );
    }
}

#[test]
fn hard_takes_the_winning_square() {
    // O to move; (1,2) completes the middle row, (0,2) would only block X
    let game: Game = "XX./OO./X..".parse().unwrap();
    assert_eq!(game.current_player(), Cell::O);
    let ai = TicTacToeAI::new(Difficulty::Hard);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(ai.select_move(&game, Cell::O, &mut rng), Position::new(1, 2));
}

#[test]
fn hard_never_loses_to_easy() {
    let hard = TicTacToeAI::new(Difficulty::Hard);
    let easy = TicTacToeAI::new(Difficulty::Easy);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);

        let result = play_out(Game::new(), hard, easy, &mut rng);
        assert_ne!(result.winner(), Some(Cell::O), "seed {}", seed);

        let result = play_out(Game::new(), easy, hard, &mut rng);
        assert_ne!(result.winner(), Some(Cell::X), "seed {}", seed);
    }
}

// Plain recursive evaluation keyed on whose turn it actually is, written
// separately from the engine's search.
fn reference_score(game: &Game, side: Cell, depth: i32) -> i32 {
    match game.evaluate_result() {
        GameResult::Win { winner, .. } if winner == side => 10 - depth,
        GameResult::Win { .. } => depth - 10,
        GameResult::Draw => 0,
        GameResult::Ongoing => {
            let scores = game.available_moves().into_iter().map(|mv| {
                let mut next = game.clone();
                next.apply(mv);
                reference_score(&next, side, depth + 1)
            });
            if game.current_player() == side {
                scores.max().unwrap()
            } else {
                scores.min().unwrap()
            }
        }
    }
}

// Outcome under perfect play for the side to move: 1 win, 0 draw, -1 loss
fn outcome(game: &Game, side: Cell) -> i32 {
    match game.evaluate_result() {
        GameResult::Win { winner, .. } if winner == side => 1,
        GameResult::Win { .. } => -1,
        GameResult::Draw => 0,
        GameResult::Ongoing => {
            let results = game.available_moves().into_iter().map(|mv| {
                let mut next = game.clone();
                next.apply(mv);
                outcome(&next, side)
            });
            if game.current_player() == side {
                results.max().unwrap()
            } else {
                results.min().unwrap()
            }
        }
    }
}

#[test]
fn hard_matches_reference_search_everywhere() {
    let positions = reachable_positions();
    assert_eq!(positions.len(), 4520);

    for game in positions {
        let side = game.current_player();
        let chosen = best_move(&game, side).unwrap();

        let root_scores: Vec<(Position, i32)> = game
            .available_moves()
            .into_iter()
            .map(|mv| {
                let mut next = game.clone();
                next.apply(mv);
                (mv, reference_score(&next, side, 0))
            })
            .collect();
        let top = root_scores.iter().map(|&(_, score)| score).max().unwrap();
        let first_best = root_scores.iter().find(|&&(_, score)| score == top).unwrap().0;
        assert_eq!(chosen, first_best, "tie-break differs in\n{}", game.board());

        // Never worse than the best achievable outcome
        let mut after = game.clone();
        after.apply(chosen);
        assert_eq!(
            outcome(&after, side),
            outcome(&game, side),
            "{} gives up value with {} in\n{}",
            side,
            chosen,
            game.board()
        );
    }
}

use log::{debug, info};

use crate::{Cell, Game, GameResult, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fired once, on the move that ends the game.
    Ended(GameResult),
}

/// Receives events from a live [`Session`].
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Running tally across games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Win { winner: Cell::X, .. } => self.x_wins += 1,
            GameResult::Win { winner: Cell::O, .. } => self.o_wins += 1,
            GameResult::Win { winner: Cell::Empty, .. } => {}
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// The one live game a host plays on, plus whoever listens for it ending.
///
/// Only the live game notifies; snapshots taken with [`Game::snapshot`] carry
/// no observers.
#[derive(Default)]
pub struct Session {
    game: Game,
    observers: Vec<Box<dyn GameObserver>>,
    scoreboard: Scoreboard,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        let player = self.game.current_player();
        if !self.game.apply_move(row, col) {
            debug!("Rejected move ({}, {}) for {}", row, col, player);
            return false;
        }
        debug!("{} played ({}, {})", player, row, col);
        self.after_move();
        true
    }

    pub fn apply(&mut self, pos: Position) -> bool {
        self.apply_move(pos.row as usize, pos.col as usize)
    }

    pub fn reset(&mut self) {
        info!("Resetting game after {} moves", self.game.move_count());
        self.game.reset();
    }

    fn after_move(&mut self) {
        // A successful move on a finished game is impossible, so reaching a
        // terminal state here is always the transition.
        if !self.game.is_game_over() {
            return;
        }

        let result = self.game.evaluate_result();
        match result {
            GameResult::Win { winner, line } => {
                info!("{} wins on {} {} {}", winner, line[0], line[1], line[2])
            }
            GameResult::Draw => info!("Game drawn"),
            GameResult::Ongoing => {}
        }

        self.scoreboard.record(&result);
        let event = GameEvent::Ended(result);
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("observers", &self.observers.len())
            .field("scoreboard", &self.scoreboard)
            .finish()
    }
}

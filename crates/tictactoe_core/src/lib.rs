// Core tic-tac-toe game logic modules
pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod position;
pub mod result;
pub mod session;

// Re-export main types for convenience
pub use board::Board;
pub use cell::Cell;
pub use error::ParseError;
pub use game::Game;
pub use position::Position;
pub use result::{GameResult, WINNING_LINES};
pub use session::{GameEvent, GameObserver, Scoreboard, Session};

pub mod ai;
pub mod difficulty;
pub mod search;

pub use ai::TicTacToeAI;
pub use difficulty::{ConfigError, Difficulty};
pub use search::{best_move, minimax, score_moves};

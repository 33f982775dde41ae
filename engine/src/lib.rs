pub mod board;
pub mod bot_controller;
pub mod lines;
pub mod logger;
pub mod minimax;
pub mod rng;
pub mod threat;
pub mod types;

pub use board::Board;
pub use bot_controller::calculate_move;
pub use rng::GameRng;
pub use types::{BoardError, Cell, Difficulty, GameOutcome, Mark};

pub mod error;
pub mod evaluation;
pub mod reversi_action;
pub mod reversi_board;
pub mod reversi_gamestate;
mod util;

pub use error::ReversiError;
pub use evaluation::{EvaluatorConfig, Heuristic, HeuristicEvaluator};
pub use reversi_action::ReversiAction;
pub use reversi_board::{Board, BoardPosition, CellState, BOARD_SIZE};
pub use reversi_gamestate::ReversiState;

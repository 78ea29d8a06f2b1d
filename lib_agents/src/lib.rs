pub mod config;
mod human_agent;
pub mod minimax_agent;
pub mod player;
mod random_agent;
pub mod reversi_game;
mod util;

pub use config::{MatchConfig, PlayerConfig};
pub use human_agent::HumanAgent;
pub use minimax_agent::MinimaxAgent;
pub use player::{Controller, ControllerKind, Player};
pub use random_agent::RandomAgent;
pub use reversi_game::ReversiGame;

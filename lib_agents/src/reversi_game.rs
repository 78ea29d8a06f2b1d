use crate::minimax_agent::tree_search;
use crate::Player;
use lib_boardgame::game_runner::{player_take_turn, GameRunner};
use lib_boardgame::{GameResult, GameState, GeneralGameRunner, PlayerColor, RunnerError, TurnOutcome};
use lib_reversi::{BoardPosition, EvaluatorConfig, HeuristicEvaluator, ReversiError, ReversiState};

/// A Reversi match: two players and the game they share.
pub struct ReversiGame {
    black: Player,
    white: Player,
    game_state: ReversiState,
}

impl ReversiGame {
    /// A new match at the standard opening, Black to move.
    pub fn create(black: Player, white: Player) -> Result<Self, ReversiError> {
        if black.color() != PlayerColor::Black || white.color() != PlayerColor::White {
            return Err(ReversiError::InvalidConfig(format!(
                "players must be Black then White, got {:?} then {:?}",
                black.color(),
                white.color()
            )));
        }

        Ok(ReversiGame {
            black,
            white,
            game_state: ReversiState::new(),
        })
    }

    pub fn player(&self, color: PlayerColor) -> &Player {
        match color {
            PlayerColor::Black => &self.black,
            PlayerColor::White => &self.white,
        }
    }

    /// The game's current state.
    pub fn game_state(&self) -> &ReversiState {
        &self.game_state
    }

    pub fn game_state_mut(&mut self) -> &mut ReversiState {
        &mut self.game_state
    }

    pub fn is_game_over(&self) -> bool {
        self.game_state.is_game_over()
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_state.game_result()
    }

    /// Lets the player to move take one turn, passing if they have no legal move.
    pub fn play_turn(&mut self) -> Result<TurnOutcome<BoardPosition>, RunnerError<ReversiError>> {
        if self.game_state.is_game_over() {
            return Err(RunnerError::Game(ReversiError::GameOver));
        }

        let agent = match self.game_state.current_player_turn() {
            PlayerColor::Black => &self.black,
            PlayerColor::White => &self.white,
        };

        player_take_turn(&mut self.game_state, agent)
    }

    /// Applies each player's turn one at a time until the game is over,
    /// and returns the game result.
    pub fn play_to_end(&mut self) -> Result<GameResult, RunnerError<ReversiError>> {
        GeneralGameRunner::play_to_end(&mut self.game_state, &self.black, &self.white)
    }
}

/// The minimax choice for the player to move, scoring positions with the given weights.
pub fn select_move(
    state: &ReversiState,
    depth: usize,
    config: &EvaluatorConfig,
) -> Result<Option<BoardPosition>, ReversiError> {
    let evaluator = HeuristicEvaluator::from_config(config)?;

    Ok(tree_search::select_move(state, depth, &evaluator)?.map(|(action, _)| action))
}

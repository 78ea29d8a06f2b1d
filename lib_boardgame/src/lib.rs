use std::error::Error;
use std::fmt;

pub mod game_runner;

#[cfg(test)]
mod test_impls;

pub use game_runner::{GeneralGameRunner, RunnerError, TurnOutcome};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Black,
    White,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Black => PlayerColor::White,
            PlayerColor::White => PlayerColor::Black,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    Draw,
    WhiteWins,
    BlackWins,
}

impl GameResult {
    pub fn is_win_for_player(self, player_color: PlayerColor) -> bool {
        match self {
            GameResult::BlackWins => player_color == PlayerColor::Black,
            GameResult::WhiteWins => player_color == PlayerColor::White,
            _ => false,
        }
    }

    /// Decides the result from final disc counts: strictly more discs wins.
    pub fn from_scores(black_score: usize, white_score: usize) -> Self {
        if black_score > white_score {
            GameResult::BlackWins
        } else if white_score > black_score {
            GameResult::WhiteWins
        } else {
            GameResult::Draw
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameResult::BlackWins => "Black wins",
            GameResult::WhiteWins => "White wins",
            GameResult::Draw => "Draw",
        };

        write!(f, "{}", msg)
    }
}

/// Describes a move a player can make in a game.
/// I.e., in Reversi, a move could be at position (3,7).
pub trait GameMove: Copy + fmt::Debug + Send + Sync + PartialEq {}

/// Describes a complete state of some Game,
/// such as the board position, the current player's turn,
/// or any other relevant info.
pub trait GameState: Clone + Send + Sync {
    type Move: GameMove;
    type Error: Error + Send + 'static;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String;

    /// Returns a fresh, ready-to-play game state for this game.
    fn initial_state() -> Self;

    /// Returns the possible moves the given player can make for the current state,
    /// in a stable order. An empty list means the player must pass.
    fn legal_moves(&self, player: PlayerColor) -> Vec<Self::Move>;

    /// Apply the given move (or 'action') for the current player, mutating this state
    /// and advancing it to the next player's turn.
    /// Fails if the move is not legal for the current player.
    fn apply_move(&mut self, action: Self::Move) -> Result<(), Self::Error>;

    /// Skip the current player's turn without taking any action.
    /// Fails if the current player has a legal move.
    fn pass_turn(&mut self) -> Result<(), Self::Error>;

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor;

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize;

    /// True if the game is over.
    fn is_game_over(&self) -> bool;

    /// Given a legal move (or 'action'), return the resulting state of applying the action
    /// to this state (does not mutate this state).
    fn next_state(&self, action: Self::Move) -> Result<Self, Self::Error> {
        let mut cloned = self.clone();
        cloned.apply_move(action)?;

        Ok(cloned)
    }

    /// The state after the current player passes (does not mutate this state).
    fn passed_state(&self) -> Result<Self, Self::Error> {
        let mut cloned = self.clone();
        cloned.pass_turn()?;

        Ok(cloned)
    }

    /// The GameResult, or None if the game is not yet over.
    fn game_result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        Some(GameResult::from_scores(
            self.player_score(PlayerColor::Black),
            self.player_score(PlayerColor::White),
        ))
    }
}

/// A trait representing the functionality of a GameAgent.
/// Specifically, given a GameState, a GameAgent must be able to decide a GameMove.
pub trait GameAgent<TState: GameState> {
    fn player_color(&self) -> PlayerColor;

    /// Picks one of `legal_moves`, which is never empty.
    /// None means the agent could not decide (e.g. its input was closed).
    fn pick_move(&self, state: &TState, legal_moves: &[TState::Move]) -> Option<TState::Move>;
}

/// Scores a state from Black's point of view:
/// positive favors Black, negative favors White.
pub trait Evaluator<TState: GameState> {
    fn evaluate(&self, state: &TState) -> f64;
}

use crate::*;
use std::error::Error;
use std::fmt;

/// A tiny take-away game for exercising the runner:
/// players alternately take 1 or 2 stones from a pile,
/// each stone taken is a point, and the game ends when the pile is empty.
#[derive(Clone, Debug, Default)]
pub struct TestGameState {
    remaining: usize,
    black_taken: usize,
    white_taken: usize,
    white_to_move: bool,
    blocked: Option<PlayerColor>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TestMove(pub usize);

#[derive(Debug)]
pub struct TestError;

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test game error")
    }
}

impl Error for TestError {}

impl GameMove for TestMove {}

impl TestGameState {
    pub fn with_pile(remaining: usize) -> Self {
        Self {
            remaining,
            ..Default::default()
        }
    }

    /// The given player has no legal moves until the next pass.
    pub fn block(&mut self, player: PlayerColor) {
        self.blocked = Some(player);
    }
}

impl GameState for TestGameState {
    type Move = TestMove;
    type Error = TestError;

    fn human_friendly(&self) -> String {
        format!("pile: {}", self.remaining)
    }

    fn initial_state() -> Self {
        Self::with_pile(10)
    }

    fn legal_moves(&self, player: PlayerColor) -> Vec<Self::Move> {
        if self.blocked == Some(player) {
            return Vec::new();
        }

        (1..=self.remaining.min(2)).map(TestMove).collect()
    }

    fn apply_move(&mut self, action: Self::Move) -> Result<(), Self::Error> {
        if !self.legal_moves(self.current_player_turn()).contains(&action) {
            return Err(TestError);
        }

        self.remaining -= action.0;
        match self.current_player_turn() {
            PlayerColor::Black => self.black_taken += action.0,
            PlayerColor::White => self.white_taken += action.0,
        }

        self.white_to_move = !self.white_to_move;
        Ok(())
    }

    fn pass_turn(&mut self) -> Result<(), Self::Error> {
        if !self.legal_moves(self.current_player_turn()).is_empty() {
            return Err(TestError);
        }

        self.blocked = None;
        self.white_to_move = !self.white_to_move;
        Ok(())
    }

    fn current_player_turn(&self) -> PlayerColor {
        if self.white_to_move {
            PlayerColor::White
        } else {
            PlayerColor::Black
        }
    }

    fn player_score(&self, player: PlayerColor) -> usize {
        match player {
            PlayerColor::Black => self.black_taken,
            PlayerColor::White => self.white_taken,
        }
    }

    fn is_game_over(&self) -> bool {
        self.remaining == 0
    }
}

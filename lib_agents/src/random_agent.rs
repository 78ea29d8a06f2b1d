use crate::util::{get_rng, random_choice};
use lib_boardgame::{GameAgent, GameState, PlayerColor};
use rand_xorshift::XorShiftRng;
use std::cell::RefCell;

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    color: PlayerColor,
    rng: RefCell<XorShiftRng>,
}

impl RandomAgent {
    /// Creates a new RandomAgent, playing for the given color.
    pub fn new(color: PlayerColor) -> Self {
        RandomAgent::with_seed(color, None)
    }

    /// A RandomAgent whose choices repeat for the same seed.
    pub fn with_seed(color: PlayerColor, seed: Option<u64>) -> Self {
        RandomAgent {
            color,
            rng: RefCell::new(get_rng(seed)),
        }
    }
}

impl<TState: GameState> GameAgent<TState> for RandomAgent {
    fn player_color(&self) -> PlayerColor {
        self.color
    }

    fn pick_move(&self, _state: &TState, legal_moves: &[TState::Move]) -> Option<TState::Move> {
        random_choice(legal_moves, &mut *self.rng.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_reversi::{BoardPosition, ReversiState};

    #[test]
    fn picks_only_legal_moves() {
        let agent = RandomAgent::new(PlayerColor::Black);
        let state = ReversiState::new();
        let legal = state.legal_moves(PlayerColor::Black);

        for _ in 0..20 {
            let picked: BoardPosition = agent.pick_move(&state, &legal).unwrap();
            assert!(legal.contains(&picked));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let a = RandomAgent::with_seed(PlayerColor::Black, Some(7));
        let b = RandomAgent::with_seed(PlayerColor::Black, Some(7));
        let state = ReversiState::new();
        let legal = state.legal_moves(PlayerColor::Black);

        for _ in 0..10 {
            let from_a: Option<BoardPosition> = a.pick_move(&state, &legal);
            let from_b: Option<BoardPosition> = b.pick_move(&state, &legal);
            assert_eq!(from_a, from_b);
        }
    }

    #[test]
    fn no_moves_gives_none() {
        let agent = RandomAgent::new(PlayerColor::White);
        let state = ReversiState::new();

        assert_eq!(None, agent.pick_move(&state, &[]));
    }
}

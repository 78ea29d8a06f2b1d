pub mod tree_search;

use lib_boardgame::{Evaluator, GameAgent, GameState, PlayerColor};
use lib_printer::{err_out, out, warn_out};
use std::time::Instant;

/// Picks moves by fixed-depth minimax over a position evaluator.
pub struct MinimaxAgent<E> {
    color: PlayerColor,
    depth: usize,
    evaluator: E,
}

impl<E> MinimaxAgent<E> {
    pub fn new(color: PlayerColor, depth: usize, evaluator: E) -> Self {
        MinimaxAgent {
            color,
            depth,
            evaluator,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<TState, E> GameAgent<TState> for MinimaxAgent<E>
where
    TState: GameState,
    E: Evaluator<TState> + Sync,
{
    fn player_color(&self) -> PlayerColor {
        self.color
    }

    fn pick_move(&self, state: &TState, _legal_moves: &[TState::Move]) -> Option<TState::Move> {
        if state.current_player_turn() != self.color {
            warn_out!(
                "Minimax agent for {:?} asked to move on {:?}'s turn.",
                self.color,
                state.current_player_turn()
            );
        }

        let now = Instant::now();

        match tree_search::select_move(state, self.depth, &self.evaluator) {
            Ok(Some((action, value))) => {
                out!(
                    "Minimax (depth {}) chose {:?} with value {:.3} in {}ms",
                    self.depth,
                    action,
                    value,
                    now.elapsed().as_millis()
                );

                Some(action)
            }
            Ok(None) => None,
            Err(e) => {
                err_out!("Minimax search failed: {}", e);
                None
            }
        }
    }
}

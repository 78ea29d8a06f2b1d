use lib_boardgame::{Evaluator, GameState, PlayerColor};
use rayon::prelude::*;

/// The minimax value of `state`, looking `depth` plies ahead.
///
/// Moves are taken from the state's player to move, and `maximizing` must be
/// true exactly when that player is Black: Black maximizes, White minimizes.
/// A player with no legal move passes, and the pass uses up one ply.
/// Leaves and finished games are scored with `evaluator`.
pub fn search<TState, E>(
    state: &TState,
    depth: usize,
    maximizing: bool,
    evaluator: &E,
) -> Result<f64, TState::Error>
where
    TState: GameState,
    E: Evaluator<TState>,
{
    if depth == 0 || state.is_game_over() {
        return Ok(evaluator.evaluate(state));
    }

    let legal_moves = state.legal_moves(state.current_player_turn());

    if legal_moves.is_empty() {
        let passed = state.passed_state()?;
        return search(&passed, depth - 1, !maximizing, evaluator);
    }

    let mut best = if maximizing {
        std::f64::NEG_INFINITY
    } else {
        std::f64::INFINITY
    };

    for action in legal_moves {
        let child = state.next_state(action)?;
        let value = search(&child, depth - 1, !maximizing, evaluator)?;

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    Ok(best)
}

/// Every legal move of the player to move, paired with its minimax value
/// `depth` plies deep (counting the move itself), in legal-move order.
///
/// Root moves are scored in parallel; each branch owns its own successor state.
/// A depth of 0 is treated as 1.
pub fn evaluate_moves<TState, E>(
    state: &TState,
    depth: usize,
    evaluator: &E,
) -> Result<Vec<(TState::Move, f64)>, TState::Error>
where
    TState: GameState,
    E: Evaluator<TState> + Sync,
{
    let depth = depth.max(1);
    let legal_moves = state.legal_moves(state.current_player_turn());

    legal_moves
        .par_iter()
        .map(|&action| -> Result<(TState::Move, f64), TState::Error> {
            let child = state.next_state(action)?;
            let maximizing = child.current_player_turn() == PlayerColor::Black;
            let value = search(&child, depth - 1, maximizing, evaluator)?;

            Ok((action, value))
        })
        .collect()
}

/// The best move for the player to move, with its value:
/// the highest value for Black, the lowest for White.
/// Ties go to the earliest move in legal-move order.
/// None if the player to move has no legal move.
pub fn select_move<TState, E>(
    state: &TState,
    depth: usize,
    evaluator: &E,
) -> Result<Option<(TState::Move, f64)>, TState::Error>
where
    TState: GameState,
    E: Evaluator<TState> + Sync,
{
    let maximizing = state.current_player_turn() == PlayerColor::Black;
    let mut best: Option<(TState::Move, f64)> = None;

    for (action, value) in evaluate_moves(state, depth, evaluator)? {
        let improves = match best {
            None => true,
            Some((_, best_value)) if maximizing => value > best_value,
            Some((_, best_value)) => value < best_value,
        };

        if improves {
            best = Some((action, value));
        }
    }

    Ok(best)
}

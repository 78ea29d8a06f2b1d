use crate::{GameAgent, GameResult, GameState, PlayerColor};
use lib_printer::out;
use std::error::Error;
use std::fmt;

/// What happened during a single turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TurnOutcome<M> {
    Moved(M),
    Passed,
}

#[derive(Debug)]
pub enum RunnerError<E> {
    /// The game state rejected a transition.
    Game(E),

    /// The agent for this color could not produce a move.
    NoMove(PlayerColor),

    /// The agent for this color produced a move outside the legal set.
    IllegalChoice(PlayerColor),
}

impl<E: fmt::Display> fmt::Display for RunnerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Game(e) => write!(f, "{}", e),
            RunnerError::NoMove(color) => write!(f, "Player {:?} did not provide a move.", color),
            RunnerError::IllegalChoice(color) => {
                write!(f, "Player {:?} provided a move that is illegal.", color)
            }
        }
    }
}

impl<E: Error + 'static> Error for RunnerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunnerError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl<E> From<E> for RunnerError<E> {
    fn from(e: E) -> Self {
        RunnerError::Game(e)
    }
}

/// A trait that describes a game runner.
pub trait GameRunner<T: GameState> {
    fn play_to_end(
        state: &mut T,
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
    ) -> Result<GameResult, RunnerError<T::Error>>;
}

/// A trivial, general-purpose implementation of a GameRunner.
/// Probably all you need to run most games.
pub struct GeneralGameRunner;

/// Asks the agent for a move and applies it,
/// or records a pass when the agent's color has no legal move.
pub fn player_take_turn<S>(
    game_state: &mut S,
    agent: &dyn GameAgent<S>,
) -> Result<TurnOutcome<S::Move>, RunnerError<S::Error>>
where
    S: GameState,
{
    let player_color = game_state.current_player_turn();
    let legal_moves = game_state.legal_moves(player_color);

    if legal_moves.is_empty() {
        out!(
            "Player {:?} has no options, so they pass their turn.",
            player_color
        );

        game_state.pass_turn()?;
        return Ok(TurnOutcome::Passed);
    }

    let selected_action = agent
        .pick_move(game_state, &legal_moves)
        .ok_or(RunnerError::NoMove(player_color))?;

    if !legal_moves.contains(&selected_action) {
        return Err(RunnerError::IllegalChoice(player_color));
    }

    out!("Player {:?} picked move {:?}", player_color, selected_action);

    game_state.apply_move(selected_action)?;

    Ok(TurnOutcome::Moved(selected_action))
}

impl<T> GameRunner<T> for GeneralGameRunner
where
    T: GameState,
{
    fn play_to_end(
        game_state: &mut T,
        black_agent: &dyn GameAgent<T>,
        white_agent: &dyn GameAgent<T>,
    ) -> Result<GameResult, RunnerError<T::Error>> {
        while !game_state.is_game_over() {
            out!("{}", game_state.human_friendly());

            let agent_to_play = match game_state.current_player_turn() {
                PlayerColor::Black => black_agent,
                PlayerColor::White => white_agent,
            };

            player_take_turn(game_state, agent_to_play)?;
        }

        out!("{}", game_state.human_friendly());

        Ok(GameResult::from_scores(
            game_state.player_score(PlayerColor::Black),
            game_state.player_score(PlayerColor::White),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_impls::game_state_test_impl::{TestGameState, TestMove};

    struct TakeFirst(PlayerColor);

    impl GameAgent<TestGameState> for TakeFirst {
        fn player_color(&self) -> PlayerColor {
            self.0
        }

        fn pick_move(&self, _state: &TestGameState, legal_moves: &[TestMove]) -> Option<TestMove> {
            legal_moves.first().copied()
        }
    }

    struct Cheater;

    impl GameAgent<TestGameState> for Cheater {
        fn player_color(&self) -> PlayerColor {
            PlayerColor::Black
        }

        fn pick_move(&self, _state: &TestGameState, _legal_moves: &[TestMove]) -> Option<TestMove> {
            Some(TestMove(99))
        }
    }

    struct Silent;

    impl GameAgent<TestGameState> for Silent {
        fn player_color(&self) -> PlayerColor {
            PlayerColor::Black
        }

        fn pick_move(&self, _state: &TestGameState, _legal_moves: &[TestMove]) -> Option<TestMove> {
            None
        }
    }

    #[test]
    fn play_to_end_alternates_until_pile_is_empty() {
        let mut state = TestGameState::with_pile(5);

        let result = GeneralGameRunner::play_to_end(
            &mut state,
            &TakeFirst(PlayerColor::Black),
            &TakeFirst(PlayerColor::White),
        )
        .expect("the game must finish");

        // Each player takes 1 stone at a time: black takes 3, white takes 2.
        assert!(state.is_game_over());
        assert_eq!(3, state.player_score(PlayerColor::Black));
        assert_eq!(2, state.player_score(PlayerColor::White));
        assert_eq!(GameResult::BlackWins, result);
    }

    #[test]
    fn take_turn_passes_when_no_moves() {
        let mut state = TestGameState::with_pile(3);
        state.block(PlayerColor::Black);

        let outcome = player_take_turn(&mut state, &TakeFirst(PlayerColor::Black)).unwrap();

        assert_eq!(TurnOutcome::Passed, outcome);
        assert_eq!(PlayerColor::White, state.current_player_turn());
    }

    #[test]
    fn take_turn_rejects_illegal_choice() {
        let mut state = TestGameState::with_pile(3);

        let err = player_take_turn(&mut state, &Cheater).unwrap_err();

        match err {
            RunnerError::IllegalChoice(PlayerColor::Black) => {}
            other => panic!("unexpected error: {:?}", other),
        }

        assert_eq!(PlayerColor::Black, state.current_player_turn());
    }

    #[test]
    fn take_turn_reports_missing_move() {
        let mut state = TestGameState::with_pile(3);

        let err = player_take_turn(&mut state, &Silent).unwrap_err();

        assert!(matches!(err, RunnerError::NoMove(PlayerColor::Black)));
    }
}

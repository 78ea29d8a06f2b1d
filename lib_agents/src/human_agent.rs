use lib_boardgame::{GameAgent, GameState, PlayerColor};
use lib_printer::{out, warn_out};
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, BufReader, Stdin};
use std::str::FromStr;

/// Reads moves, one per line, from a text source (stdin by default).
pub struct HumanAgent<R> {
    player_color: PlayerColor,
    input: RefCell<R>,
}

impl HumanAgent<BufReader<Stdin>> {
    pub fn from_stdin(player_color: PlayerColor) -> Self {
        HumanAgent::new(player_color, BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead> HumanAgent<R> {
    pub fn new(player_color: PlayerColor, input: R) -> Self {
        Self {
            player_color,
            input: RefCell::new(input),
        }
    }

    /// The next line of input, or None once input is closed.
    fn prompt_input(&self) -> Option<String> {
        out!("Enter move for {:?} (e.g. D3): ", self.player_color);

        let mut line = String::new();

        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                warn_out!("Couldn't capture user input: {}", e);
                None
            }
        }
    }
}

impl<TState, R> GameAgent<TState> for HumanAgent<R>
where
    TState: GameState,
    TState::Move: FromStr,
    <TState::Move as FromStr>::Err: Display,
    R: BufRead,
{
    fn player_color(&self) -> PlayerColor {
        self.player_color
    }

    fn pick_move(&self, _state: &TState, legal_moves: &[TState::Move]) -> Option<TState::Move> {
        loop {
            let line = self.prompt_input()?;

            match <TState::Move as FromStr>::from_str(line.trim()) {
                Err(e) => out!("Invalid input: {}. Try again.", e),
                Ok(m) if !legal_moves.contains(&m) => {
                    out!("The provided move was not valid. Try again.")
                }
                Ok(m) => return Some(m),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_reversi::{BoardPosition, ReversiState};
    use std::io::Cursor;

    #[test]
    fn retries_until_a_legal_move_is_entered() {
        let agent = HumanAgent::new(PlayerColor::Black, Cursor::new("zz\nA1\n\nd3\nE6\n"));
        let state = ReversiState::new();
        let legal = state.legal_moves(PlayerColor::Black);

        let picked: Option<BoardPosition> = agent.pick_move(&state, &legal);

        assert_eq!(Some(BoardPosition::new(2, 3)), picked);

        // the next line is still waiting
        let picked: Option<BoardPosition> = agent.pick_move(&state, &legal);
        assert_eq!(Some(BoardPosition::new(5, 4)), picked);
    }

    #[test]
    fn closed_input_gives_none() {
        let agent = HumanAgent::new(PlayerColor::Black, Cursor::new("A1\n"));
        let state = ReversiState::new();
        let legal = state.legal_moves(PlayerColor::Black);

        let picked: Option<BoardPosition> = agent.pick_move(&state, &legal);

        assert_eq!(None, picked);
    }
}

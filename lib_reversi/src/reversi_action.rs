use crate::{BoardPosition, ReversiError, BOARD_SIZE};
use std::fmt;

/// One recorded turn in a game's history.
#[derive(Copy, Clone, PartialEq)]
pub enum ReversiAction {
    PassTurn,
    Move { position: BoardPosition },
}

impl ReversiAction {
    pub fn position(self) -> Option<BoardPosition> {
        match self {
            ReversiAction::Move { position } => Some(position),
            ReversiAction::PassTurn => None,
        }
    }
}

impl fmt::Debug for ReversiAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReversiAction::PassTurn => write!(f, "(player passes turn)"),
            ReversiAction::Move { position } => write!(f, "{}", position),
        }
    }
}

impl fmt::Display for ReversiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Column letter then row number, e.g. "D3" is (row 2, col 3).
impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }

        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

impl std::str::FromStr for BoardPosition {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();

        let letter = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return ReversiError::notation(format!("{:?} -- expected format: d3", s)),
        };

        let row = match chars.as_str().parse::<usize>() {
            Ok(row) => row,
            Err(_) => return ReversiError::notation(format!("{:?} -- expected format: d3", s)),
        };

        let col = (letter as u8 - b'a') as usize;

        if col >= BOARD_SIZE || row == 0 || row > BOARD_SIZE {
            return ReversiError::notation(format!(
                "{:?} is outside the {}x{} board",
                s, BOARD_SIZE, BOARD_SIZE
            ));
        }

        Ok(BoardPosition::new(row - 1, col))
    }
}

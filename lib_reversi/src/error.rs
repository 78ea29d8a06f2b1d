use crate::BoardPosition;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ReversiError {
    /// Evaluator weights are unknown, invalid, or do not sum to 1.
    InvalidConfig(String),

    /// The position is off the board or not a legal move for the active player.
    IllegalMove(BoardPosition),

    /// A pass was requested while the active player still had this many legal moves.
    PassWithLegalMoves(usize),

    /// A move or pass was requested after the game ended.
    GameOver,

    /// Text could not be read as a board position or board.
    Notation(String),
}

impl ReversiError {
    pub(crate) fn config<T>(msg: impl AsRef<str>) -> Result<T, Self> {
        Err(ReversiError::InvalidConfig(String::from(msg.as_ref())))
    }

    pub(crate) fn notation<T>(msg: impl AsRef<str>) -> Result<T, Self> {
        Err(ReversiError::Notation(String::from(msg.as_ref())))
    }
}

impl fmt::Display for ReversiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReversiError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            ReversiError::IllegalMove(position) => write!(
                f,
                "Illegal move at (row {}, col {})",
                position.row(),
                position.col()
            ),
            ReversiError::PassWithLegalMoves(count) => write!(
                f,
                "Cannot pass while {} legal move(s) are available",
                count
            ),
            ReversiError::GameOver => write!(f, "The game is already over"),
            ReversiError::Notation(msg) => write!(f, "Unrecognized notation: {}", msg),
        }
    }
}

impl Error for ReversiError {}

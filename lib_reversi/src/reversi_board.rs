use crate::util::BoardDirectionIter;
use crate::ReversiError;
use lib_boardgame::{GameMove, PlayerColor};
use std::str::FromStr;

/// The size of the board.
/// E.x., if this is 8, the Reversi board is 8x8 spaces large.
pub const BOARD_SIZE: usize = 8;

pub(crate) const BLACK_PIECE: char = 'X';
pub(crate) const WHITE_PIECE: char = 'O';
pub(crate) const EMPTY_SPACE: char = '-';

/// When traversing pieces on the board,
/// a positive direction indicates increasing values for col or row,
/// a negative direction indicates decreasing values for col or row,
/// and a 'same' direction indicates no movement for col or row.
/// Row 0 is the top of the board, so 'row: positive' walks downward.
pub(crate) mod board_directions {
    pub type Direction = i32;
    pub const POSITIVE: Direction = 1;
    pub const NEGATIVE: Direction = -1;
    pub const SAME: Direction = 0;
}

use board_directions::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Directions {
    pub row_dir: Direction,
    pub col_dir: Direction,
}

/// The 8 rays a capture can travel along: orthogonals, then diagonals.
pub(crate) const ALL_DIRECTIONS: [Directions; 8] = [
    Directions { row_dir: NEGATIVE, col_dir: SAME },
    Directions { row_dir: POSITIVE, col_dir: SAME },
    Directions { row_dir: SAME, col_dir: NEGATIVE },
    Directions { row_dir: SAME, col_dir: POSITIVE },
    Directions { row_dir: NEGATIVE, col_dir: NEGATIVE },
    Directions { row_dir: NEGATIVE, col_dir: POSITIVE },
    Directions { row_dir: POSITIVE, col_dir: NEGATIVE },
    Directions { row_dir: POSITIVE, col_dir: POSITIVE },
];

/// The four corner squares.
pub const CORNERS: [BoardPosition; 4] = [
    BoardPosition { row: 0, col: 0 },
    BoardPosition { row: 0, col: BOARD_SIZE - 1 },
    BoardPosition { row: BOARD_SIZE - 1, col: 0 },
    BoardPosition { row: BOARD_SIZE - 1, col: BOARD_SIZE - 1 },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl CellState {
    /// The color of the disc on this cell, if any.
    pub fn color(self) -> Option<PlayerColor> {
        match self {
            CellState::Black => Some(PlayerColor::Black),
            CellState::White => Some(PlayerColor::White),
            CellState::Empty => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            CellState::Black => BLACK_PIECE,
            CellState::White => WHITE_PIECE,
            CellState::Empty => EMPTY_SPACE,
        }
    }
}

impl From<PlayerColor> for CellState {
    fn from(color: PlayerColor) -> CellState {
        match color {
            PlayerColor::Black => CellState::Black,
            PlayerColor::White => CellState::White,
        }
    }
}

/// A 0-indexed (row, col) coordinate.
/// Row 0 is the top of the board and col 0 is the left edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct BoardPosition {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

impl BoardPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl GameMove for BoardPosition {}

impl From<(usize, usize)> for BoardPosition {
    fn from((row, col): (usize, usize)) -> Self {
        BoardPosition::new(row, col)
    }
}

/// The 8x8 grid of cells, with running disc counts.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    black_count: usize,
    white_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            black_count: 0,
            white_count: 0,
        }
    }

    /// The standard opening: White on (3,3) and (4,4), Black on (3,4) and (4,3).
    pub fn opening() -> Self {
        let mut board = Board::empty();

        board.set(BoardPosition::new(3, 3), CellState::White);
        board.set(BoardPosition::new(3, 4), CellState::Black);
        board.set(BoardPosition::new(4, 3), CellState::Black);
        board.set(BoardPosition::new(4, 4), CellState::White);

        board
    }

    /// Every position on the board, row-major: (0,0), (0,1) ... (0,7), (1,0) ... (7,7).
    pub fn positions() -> impl Iterator<Item = BoardPosition> {
        (0..(BOARD_SIZE * BOARD_SIZE))
            .map(|index| BoardPosition::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// The cell at the given position.
    /// Panics if the position is off the board.
    pub fn get(&self, position: BoardPosition) -> CellState {
        self.cells[position.row][position.col]
    }

    /// Set the cell at the given position, keeping the disc counts current.
    /// Panics if the position is off the board.
    pub fn set(&mut self, position: BoardPosition, cell: CellState) {
        match self.get(position) {
            CellState::White => self.white_count -= 1,
            CellState::Black => self.black_count -= 1,
            CellState::Empty => {}
        };

        match cell {
            CellState::White => self.white_count += 1,
            CellState::Black => self.black_count += 1,
            CellState::Empty => {}
        };

        self.cells[position.row][position.col] = cell;
    }

    pub fn count(&self, cell: CellState) -> usize {
        match cell {
            CellState::Black => self.black_count,
            CellState::White => self.white_count,
            CellState::Empty => BOARD_SIZE * BOARD_SIZE - self.black_count - self.white_count,
        }
    }

    pub fn is_full(&self) -> bool {
        self.count(CellState::Empty) == 0
    }

    /// Given the position of a (real or hypothetical) piece of `color`,
    /// find the piece of the same color that, together with it,
    /// traps one or more enemies in a straight line in the given direction.
    ///
    /// Examples:
    ///    In the below case, the pieces at 'a' and 'b'
    ///    are anchors, since together they surround the 3 enemy pieces.
    ///        X O O O X
    ///        a       b
    ///
    ///    In the below case, there is no anchor for 'a',
    ///    since the gap at 'x' breaks the run of enemy pieces.
    ///        X O _ O X
    ///        a   x   b
    ///
    /// Returns the anchor's position, or None if this direction traps nothing.
    fn find_anchor(
        &self,
        origin: BoardPosition,
        color: PlayerColor,
        direction: Directions,
    ) -> Option<BoardPosition> {
        let own = CellState::from(color);

        for (index, position) in BoardDirectionIter::new(origin, direction).enumerate() {
            match self.get(position) {
                CellState::Empty => return None,
                cell if cell == own => {
                    // Directly adjacent to the origin means nothing was trapped.
                    return if index == 0 { None } else { Some(position) };
                }
                _ => continue,
            }
        }

        // ran off the edge without closing the run
        None
    }

    /// True if `color` may place a disc at `position`:
    /// the cell is on the board, empty, and traps at least one enemy disc along some ray.
    pub fn is_legal_move(&self, position: BoardPosition, color: PlayerColor) -> bool {
        if !position.is_on_board() || self.get(position) != CellState::Empty {
            return false;
        }

        ALL_DIRECTIONS
            .iter()
            .any(|&direction| self.find_anchor(position, color, direction).is_some())
    }

    /// Every legal move for `color`, in row-major order.
    pub fn legal_moves(&self, color: PlayerColor) -> Vec<BoardPosition> {
        Board::positions()
            .filter(|&position| self.is_legal_move(position, color))
            .collect()
    }

    /// The enemy discs that `color` placing at `position` would flip.
    /// Empty when the move is not legal.
    pub fn capture_set(&self, position: BoardPosition, color: PlayerColor) -> Vec<BoardPosition> {
        if !position.is_on_board() || self.get(position) != CellState::Empty {
            return Vec::new();
        }

        let mut captured = Vec::new();

        for &direction in ALL_DIRECTIONS.iter() {
            if let Some(anchor) = self.find_anchor(position, color, direction) {
                captured.extend(
                    BoardDirectionIter::new(position, direction).take_while(|&p| p != anchor),
                );
            }
        }

        captured
    }

    /// Places a disc of `color` at `position` and flips every captured disc.
    ///
    /// The move must already be known to be legal; this is not re-checked
    /// outside of debug builds.
    ///
    /// Example:
    ///    O X X X *
    ///          X X
    ///        O   X
    ///            X
    ///
    /// Placing a white piece ('O') at the position marked with the * will result in the following state:
    ///
    ///    O O O O O
    ///          O X
    ///        O   X
    ///            X
    pub fn apply_move(&mut self, position: BoardPosition, color: PlayerColor) {
        debug_assert!(
            self.is_legal_move(position, color),
            "apply_move called with an illegal move: {:?}",
            position
        );

        let captured = self.capture_set(position, color);
        let cell = CellState::from(color);

        self.set(position, cell);
        for p in captured {
            self.set(p, cell);
        }
    }

    /// One line per row, top to bottom, using 'X' for Black, 'O' for White and '-' for empty.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

/// Reads a board from 64 cell characters ('X', 'O', and '-' or '.'),
/// row by row from the top. Whitespace is ignored.
impl FromStr for Board {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut cells = Board::positions();

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                BLACK_PIECE | 'x' => CellState::Black,
                WHITE_PIECE | 'o' => CellState::White,
                EMPTY_SPACE | '.' => CellState::Empty,
                other => return ReversiError::notation(format!("unexpected cell '{}'", other)),
            };

            match cells.next() {
                Some(position) => board.set(position, cell),
                None => return ReversiError::notation("more than 64 cells"),
            }
        }

        if cells.next().is_some() {
            return ReversiError::notation("fewer than 64 cells");
        }

        Ok(board)
    }
}

use crate::reversi_board::{Directions, BOARD_SIZE};
use crate::BoardPosition;

/// Walks from (but not including) an origin position in one direction
/// until it steps off the board.
pub(crate) struct BoardDirectionIter {
    direction: Directions,

    /// for iteration -- what position are we currently at?
    cursor: BoardPosition,
}

impl BoardDirectionIter {
    pub fn new(origin: BoardPosition, direction: Directions) -> Self {
        debug_assert!(
            direction.row_dir != 0 || direction.col_dir != 0,
            "a direction of (0, 0) would never move"
        );

        BoardDirectionIter {
            direction,
            cursor: origin,
        }
    }
}

impl Iterator for BoardDirectionIter {
    type Item = BoardPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let next_row = self.cursor.row as i32 + self.direction.row_dir;
        let next_col = self.cursor.col as i32 + self.direction.col_dir;

        if next_row < 0 || next_col < 0 {
            return None;
        }

        if next_row >= BOARD_SIZE as i32 || next_col >= BOARD_SIZE as i32 {
            return None;
        }

        self.cursor = BoardPosition::new(next_row as usize, next_col as usize);

        Some(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_stops_at_edge() {
        let right = Directions {
            row_dir: 0,
            col_dir: 1,
        };

        let walked: Vec<_> = BoardDirectionIter::new(BoardPosition::new(2, 5), right).collect();

        assert_eq!(
            vec![BoardPosition::new(2, 6), BoardPosition::new(2, 7)],
            walked
        );
    }

    #[test]
    fn iter_walks_diagonally_up_left() {
        let up_left = Directions {
            row_dir: -1,
            col_dir: -1,
        };

        let walked: Vec<_> = BoardDirectionIter::new(BoardPosition::new(2, 3), up_left).collect();

        assert_eq!(
            vec![BoardPosition::new(1, 2), BoardPosition::new(0, 1)],
            walked
        );
    }

    #[test]
    fn iter_from_corner_outward_is_empty() {
        let up = Directions {
            row_dir: -1,
            col_dir: 0,
        };

        assert_eq!(0, BoardDirectionIter::new(BoardPosition::new(0, 0), up).count());
    }
}

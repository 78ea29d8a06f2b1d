use crate::reversi_board::{BLACK_PIECE, EMPTY_SPACE, WHITE_PIECE};
use crate::{Board, BoardPosition, CellState, ReversiAction, ReversiError, BOARD_SIZE};
use lib_boardgame::{GameResult, GameState, PlayerColor};
use std::fmt;

const HINT_SPACE: char = '*';

#[derive(Clone, Debug)]
pub struct ReversiState {
    /// The discs on the board.
    board: Board,

    /// The player whose turn it currently is.
    current_player_turn: PlayerColor,

    /// Legal moves for the current player, derived from the board after every transition.
    cur_state_legal_moves: Vec<BoardPosition>,

    /// Every move and pass so far, oldest first.
    history: Vec<ReversiAction>,

    is_game_over: bool,
}

impl Default for ReversiState {
    fn default() -> Self {
        ReversiState::new()
    }
}

impl ReversiState {
    pub const BOARD_SIZE: usize = BOARD_SIZE;

    /// A new game at the standard opening, Black to move.
    pub fn new() -> Self {
        ReversiState::from_board(Board::opening(), PlayerColor::Black)
    }

    /// A game at an arbitrary position with the given player to move.
    /// The game is over immediately if the board is full or either color has no discs.
    pub fn from_board(board: Board, current_player_turn: PlayerColor) -> Self {
        let mut state = ReversiState {
            board,
            current_player_turn,
            cur_state_legal_moves: Vec::new(),
            history: Vec::new(),
            is_game_over: false,
        };

        state.update_stored_state_values();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> PlayerColor {
        self.current_player_turn
    }

    pub fn inactive_color(&self) -> PlayerColor {
        self.current_player_turn.opponent()
    }

    pub fn black_score(&self) -> usize {
        self.board.count(CellState::Black)
    }

    pub fn white_score(&self) -> usize {
        self.board.count(CellState::White)
    }

    /// Every move and pass so far, oldest first.
    pub fn history(&self) -> &[ReversiAction] {
        &self.history
    }

    /// The most recent placement, or None if the last turn was a pass
    /// (or no turn has been played).
    pub fn previous_move(&self) -> Option<BoardPosition> {
        self.history.last().and_then(|a| a.position())
    }

    /// The active player's legal moves, row-major.
    pub fn current_legal_moves(&self) -> &[BoardPosition] {
        &self.cur_state_legal_moves
    }

    pub fn is_legal_move(&self, position: BoardPosition) -> bool {
        !self.is_game_over && self.cur_state_legal_moves.contains(&position)
    }

    /// The discs the active player would flip by playing at `position`.
    pub fn capture_set(&self, position: BoardPosition) -> Vec<BoardPosition> {
        self.board.capture_set(position, self.current_player_turn)
    }

    /// The result, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.game_result()
    }

    /// Like `human_friendly()`, but marks the active player's legal moves with '*'.
    pub fn human_friendly_with_hints(&self) -> String {
        self.render(true)
    }

    /// Since the human-friendly output is always the same size,
    /// might as well pre-compute it so we can reserve the space ahead of time.
    /// (A test exists to confirm this is accurate.)
    const fn friendly_print_size() -> usize {
        199
    }

    fn render(&self, hints: bool) -> String {
        let mut result = String::new();

        result.reserve(ReversiState::friendly_print_size());

        result.push('\n');

        for row in 0..BOARD_SIZE {
            result.push_str(&format!("{}| ", row + 1));

            for col in 0..BOARD_SIZE {
                let position = BoardPosition::new(row, col);

                let piece_char = match self.board.get(position) {
                    CellState::White => WHITE_PIECE,
                    CellState::Black => BLACK_PIECE,
                    CellState::Empty if hints && self.is_legal_move(position) => HINT_SPACE,
                    CellState::Empty => EMPTY_SPACE,
                };

                result.push(piece_char);
                result.push(' ');
            }

            result.push('\n');
        }

        result.push_str("  ");
        for _ in 0..BOARD_SIZE {
            result.push_str("--");
        }

        result.push('\n');
        result.push_str("   ");
        for col in 0..BOARD_SIZE {
            result.push((b'A' + col as u8) as char);
            result.push(' ');
        }

        result
    }

    fn calc_is_game_over(&self) -> bool {
        // a full board, or one color wiped out, leaves nothing to play for
        self.board.is_full() || self.black_score() == 0 || self.white_score() == 0
    }

    fn update_stored_state_values(&mut self) {
        self.cur_state_legal_moves = self.board.legal_moves(self.current_player_turn);
        self.is_game_over = self.calc_is_game_over();
    }
}

impl GameState for ReversiState {
    type Move = BoardPosition;
    type Error = ReversiError;

    /// Returns a human-friendly string for representing the state.
    fn human_friendly(&self) -> String {
        self.render(false)
    }

    fn initial_state() -> Self {
        ReversiState::new()
    }

    fn legal_moves(&self, player: PlayerColor) -> Vec<Self::Move> {
        if player == self.current_player_turn {
            self.cur_state_legal_moves.clone()
        } else {
            self.board.legal_moves(player)
        }
    }

    /// Places the current player's disc at the given position, flipping every
    /// captured disc, then hands the turn to the other player.
    fn apply_move(&mut self, position: Self::Move) -> Result<(), Self::Error> {
        if self.is_game_over {
            return Err(ReversiError::GameOver);
        }

        if !self.cur_state_legal_moves.contains(&position) {
            return Err(ReversiError::IllegalMove(position));
        }

        self.board.apply_move(position, self.current_player_turn);
        self.history.push(ReversiAction::Move { position });

        // advance the player turn to the next player
        self.current_player_turn = self.current_player_turn.opponent();
        self.update_stored_state_values();

        Ok(())
    }

    /// Hands the turn to the other player without touching the board.
    /// If the other player cannot move either, the game is over.
    fn pass_turn(&mut self) -> Result<(), Self::Error> {
        if self.is_game_over {
            return Err(ReversiError::GameOver);
        }

        if !self.cur_state_legal_moves.is_empty() {
            return Err(ReversiError::PassWithLegalMoves(
                self.cur_state_legal_moves.len(),
            ));
        }

        self.history.push(ReversiAction::PassTurn);
        self.current_player_turn = self.current_player_turn.opponent();
        self.update_stored_state_values();

        if self.cur_state_legal_moves.is_empty() {
            // two passes in a row
            self.is_game_over = true;
        }

        Ok(())
    }

    /// Returns the current player whose turn it currently is.
    fn current_player_turn(&self) -> PlayerColor {
        self.current_player_turn
    }

    /// Returns the score of the given player in this state.
    fn player_score(&self, player: PlayerColor) -> usize {
        match player {
            PlayerColor::White => self.white_score(),
            PlayerColor::Black => self.black_score(),
        }
    }

    fn is_game_over(&self) -> bool {
        self.is_game_over
    }
}

impl fmt::Display for ReversiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_friendly())
    }
}

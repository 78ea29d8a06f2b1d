use crate::{HumanAgent, MinimaxAgent, RandomAgent};
use lib_boardgame::{GameAgent, PlayerColor};
use lib_reversi::{BoardPosition, HeuristicEvaluator, ReversiState};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    Human,
    Random,
    Minimax,
}

/// What decides a player's moves.
pub enum Controller {
    Human(HumanAgent<Box<dyn BufRead + Send>>),
    Random(RandomAgent),
    Minimax(MinimaxAgent<HeuristicEvaluator>),
}

impl Controller {
    fn agent(&self) -> &dyn GameAgent<ReversiState> {
        match self {
            Controller::Human(agent) => agent,
            Controller::Random(agent) => agent,
            Controller::Minimax(agent) => agent,
        }
    }
}

/// One side of a Reversi match: a color and the controller playing it.
pub struct Player {
    color: PlayerColor,
    controller: Controller,
}

impl Player {
    /// A human typing moves on stdin.
    pub fn human(color: PlayerColor) -> Self {
        let stdin: Box<dyn BufRead + Send> = Box::new(BufReader::new(std::io::stdin()));
        Player::human_with_input(color, stdin)
    }

    pub fn human_with_input(color: PlayerColor, input: Box<dyn BufRead + Send>) -> Self {
        Player {
            color,
            controller: Controller::Human(HumanAgent::new(color, input)),
        }
    }

    pub fn random(color: PlayerColor, seed: Option<u64>) -> Self {
        Player {
            color,
            controller: Controller::Random(RandomAgent::with_seed(color, seed)),
        }
    }

    pub fn minimax(color: PlayerColor, evaluator: HeuristicEvaluator, depth: usize) -> Self {
        Player {
            color,
            controller: Controller::Minimax(MinimaxAgent::new(color, depth, evaluator)),
        }
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn kind(&self) -> ControllerKind {
        match self.controller {
            Controller::Human(_) => ControllerKind::Human,
            Controller::Random(_) => ControllerKind::Random,
            Controller::Minimax(_) => ControllerKind::Minimax,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Search depth, for minimax players.
    pub fn depth(&self) -> Option<usize> {
        match &self.controller {
            Controller::Minimax(agent) => Some(agent.depth()),
            _ => None,
        }
    }

    /// Position evaluator, for minimax players.
    pub fn evaluator(&self) -> Option<&HeuristicEvaluator> {
        match &self.controller {
            Controller::Minimax(agent) => Some(agent.evaluator()),
            _ => None,
        }
    }

    /// The move this player wants to make in `state`,
    /// or None if there is no legal move (or no decision could be made).
    pub fn propose_move(&self, state: &ReversiState) -> Option<BoardPosition> {
        let legal_moves = state.current_legal_moves();

        if legal_moves.is_empty() {
            return None;
        }

        self.controller.agent().pick_move(state, legal_moves)
    }
}

impl GameAgent<ReversiState> for Player {
    fn player_color(&self) -> PlayerColor {
        self.color
    }

    fn pick_move(&self, state: &ReversiState, legal_moves: &[BoardPosition]) -> Option<BoardPosition> {
        self.controller.agent().pick_move(state, legal_moves)
    }
}

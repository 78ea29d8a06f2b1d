//! Weighted heuristic evaluation of Reversi positions.
//!
//! Every heuristic is normalized to [-1, +1] from Black's point of view,
//! and the evaluator combines them with weights that must sum to 1.

use crate::reversi_board::CORNERS;
use crate::{CellState, ReversiError, ReversiState};
use lib_boardgame::{Evaluator, GameResult, GameState, PlayerColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// How far the weights may stray from summing to exactly 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    DiscDiff,
    Mobility,
    Corners,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::DiscDiff, Heuristic::Mobility, Heuristic::Corners];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::DiscDiff => "disc_diff",
            Heuristic::Mobility => "mobility",
            Heuristic::Corners => "corners",
        }
    }

    pub fn score(self, state: &ReversiState) -> f64 {
        match self {
            Heuristic::DiscDiff => disc_diff(state),
            Heuristic::Mobility => mobility(state),
            Heuristic::Corners => corners(state),
        }
    }
}

impl FromStr for Heuristic {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .copied()
            .find(|h| h.name() == s)
            .ok_or_else(|| ReversiError::InvalidConfig(format!("unknown heuristic '{}'", s)))
    }
}

/// (max - min) / (max + min), or 0 when both are zero.
fn balance(max: usize, min: usize) -> f64 {
    if max + min == 0 {
        return 0.0;
    }

    (max as f64 - min as f64) / (max + min) as f64
}

/// Disc count balance.
pub fn disc_diff(state: &ReversiState) -> f64 {
    balance(state.black_score(), state.white_score())
}

/// Legal move count balance.
pub fn mobility(state: &ReversiState) -> f64 {
    balance(
        state.legal_moves(PlayerColor::Black).len(),
        state.legal_moves(PlayerColor::White).len(),
    )
}

/// Corner ownership balance.
pub fn corners(state: &ReversiState) -> f64 {
    let count = |cell: CellState| {
        CORNERS
            .iter()
            .filter(|&&p| state.board().get(p) == cell)
            .count()
    };

    balance(count(CellState::Black), count(CellState::White))
}

/// Heuristic weights as read from configuration, keyed by heuristic name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub weights: BTreeMap<String, f64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(Heuristic::DiscDiff.name().to_string(), 0.5);
        weights.insert(Heuristic::Mobility.name().to_string(), 0.5);
        weights.insert(Heuristic::Corners.name().to_string(), 0.0);

        EvaluatorConfig { weights }
    }
}

/// Scores a position as the weighted sum of its heuristics,
/// or as the absolute result once the game is over.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicEvaluator {
    weights: Vec<(Heuristic, f64)>,
}

impl HeuristicEvaluator {
    /// Fails with `InvalidConfig` unless every name is a known heuristic,
    /// no heuristic is repeated, every weight is finite and non-negative,
    /// and the weights sum to 1.
    pub fn new<I, S>(weights: I) -> Result<Self, ReversiError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<(Heuristic, f64)> = Vec::new();

        for (name, weight) in weights {
            let heuristic: Heuristic = name.as_ref().parse()?;

            if !weight.is_finite() || weight < 0.0 {
                return ReversiError::config(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    heuristic.name(),
                    weight
                ));
            }

            if parsed.iter().any(|&(h, _)| h == heuristic) {
                return ReversiError::config(format!(
                    "heuristic '{}' listed more than once",
                    heuristic.name()
                ));
            }

            parsed.push((heuristic, weight));
        }

        let total: f64 = parsed.iter().map(|&(_, w)| w).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return ReversiError::config(format!("weights must sum to 1, got {}", total));
        }

        Ok(HeuristicEvaluator { weights: parsed })
    }

    pub fn from_config(config: &EvaluatorConfig) -> Result<Self, ReversiError> {
        HeuristicEvaluator::new(config.weights.iter().map(|(name, &w)| (name, w)))
    }

    pub fn weights(&self) -> &[(Heuristic, f64)] {
        &self.weights
    }

    pub fn to_config(&self) -> EvaluatorConfig {
        EvaluatorConfig {
            weights: self
                .weights
                .iter()
                .map(|&(h, w)| (h.name().to_string(), w))
                .collect(),
        }
    }
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        HeuristicEvaluator {
            weights: vec![(Heuristic::DiscDiff, 0.5), (Heuristic::Mobility, 0.5)],
        }
    }
}

impl Evaluator<ReversiState> for HeuristicEvaluator {
    /// +1 / 0 / -1 for a finished game regardless of weights,
    /// otherwise the weighted heuristic sum.
    fn evaluate(&self, state: &ReversiState) -> f64 {
        if let Some(result) = state.game_result() {
            return match result {
                GameResult::BlackWins => 1.0,
                GameResult::Draw => 0.0,
                GameResult::WhiteWins => -1.0,
            };
        }

        self.weights
            .iter()
            .map(|&(heuristic, weight)| weight * heuristic.score(state))
            .sum()
    }
}

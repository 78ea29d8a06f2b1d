use crate::player::{ControllerKind, Player};
use lib_boardgame::PlayerColor;
use lib_printer::warn_out;
use lib_reversi::{EvaluatorConfig, HeuristicEvaluator, ReversiError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DEPTH: usize = 3;

/// How one side of a match is controlled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub kind: ControllerKind,

    /// Search depth for minimax players.
    #[serde(default)]
    pub depth: Option<usize>,

    /// Heuristic weights for minimax players.
    #[serde(default)]
    pub evaluator: Option<EvaluatorConfig>,

    /// Seed for random players, for reproducible matches.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlayerConfig {
    pub fn minimax(depth: usize) -> Self {
        PlayerConfig {
            kind: ControllerKind::Minimax,
            depth: Some(depth),
            evaluator: None,
            seed: None,
        }
    }

    pub fn random(seed: Option<u64>) -> Self {
        PlayerConfig {
            kind: ControllerKind::Random,
            depth: None,
            evaluator: None,
            seed,
        }
    }

    pub fn build(&self, color: PlayerColor) -> Result<Player, ReversiError> {
        let player = match self.kind {
            ControllerKind::Human => Player::human(color),
            ControllerKind::Random => Player::random(color, self.seed),
            ControllerKind::Minimax => {
                let evaluator = match &self.evaluator {
                    Some(config) => HeuristicEvaluator::from_config(config)?,
                    None => HeuristicEvaluator::from_config(&EvaluatorConfig::default())?,
                };

                Player::minimax(color, evaluator, self.depth.unwrap_or(DEFAULT_DEPTH))
            }
        };

        Ok(player)
    }
}

/// Both sides of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub black: PlayerConfig,
    pub white: PlayerConfig,

    /// Suppress board and move output.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            black: PlayerConfig::minimax(DEFAULT_DEPTH),
            white: PlayerConfig::random(None),
            quiet: false,
        }
    }
}

impl MatchConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: MatchConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// The config at `path`, or the default match if it is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            warn_out!("Ignoring config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// The (black, white) players this config describes.
    pub fn build_players(&self) -> Result<(Player, Player), ReversiError> {
        Ok((
            self.black.build(PlayerColor::Black)?,
            self.white.build(PlayerColor::White)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_match_config() {
        let json = r#"{
            "black": { "kind": "minimax", "depth": 2,
                       "evaluator": { "weights": { "disc_diff": 0.7, "mobility": 0.3 } } },
            "white": { "kind": "random", "seed": 11 },
            "quiet": true
        }"#;

        let config: MatchConfig = serde_json::from_str(json).unwrap();

        assert!(config.quiet);
        assert_eq!(ControllerKind::Minimax, config.black.kind);
        assert_eq!(Some(11), config.white.seed);

        let (black, white) = config.build_players().unwrap();

        assert_eq!(ControllerKind::Minimax, black.kind());
        assert_eq!(Some(2), black.depth());
        assert_eq!(2, black.evaluator().unwrap().weights().len());
        assert_eq!(ControllerKind::Random, white.kind());
        assert_eq!(PlayerColor::White, white.color());
    }

    #[test]
    fn minimax_defaults_depth_and_weights() {
        let player = PlayerConfig {
            kind: ControllerKind::Minimax,
            depth: None,
            evaluator: None,
            seed: None,
        }
        .build(PlayerColor::Black)
        .unwrap();

        assert_eq!(Some(DEFAULT_DEPTH), player.depth());
        assert!(player.evaluator().is_some());
    }

    #[test]
    fn bad_weights_fail_to_build() {
        let mut config = PlayerConfig::minimax(2);
        let mut weights = EvaluatorConfig::default();
        weights.weights.insert("disc_diff".to_string(), 0.9);
        config.evaluator = Some(weights);

        assert!(matches!(
            config.build(PlayerColor::Black),
            Err(ReversiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let json = r#"{ "black": { "kind": "oracle" }, "white": { "kind": "human" } }"#;

        assert!(serde_json::from_str::<MatchConfig>(json).is_err());
    }

    #[test]
    fn missing_file_gives_default() {
        let config = MatchConfig::load_or_default("/definitely/not/here/othello.json");

        assert_eq!(MatchConfig::default(), config);
        assert!(MatchConfig::load("/definitely/not/here/othello.json").is_err());
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{AttemptLimit, Difficulty};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Challenge,
    Expert,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Classic
    }
}

impl GameMode {
    pub fn all() -> Vec<GameMode> {
        vec![GameMode::Classic, GameMode::Challenge, GameMode::Expert]
    }

    /// Attempt budget for a round at the given difficulty. Classic never
    /// runs out of attempts.
    pub fn attempt_limit(&self, difficulty: Difficulty) -> AttemptLimit {
        match self {
            GameMode::Classic => AttemptLimit::Unlimited,
            GameMode::Challenge => AttemptLimit::Limited(match difficulty {
                Difficulty::Easy => 5,
                Difficulty::Medium => 7,
                Difficulty::Hard => 10,
            }),
            GameMode::Expert => AttemptLimit::Limited(match difficulty {
                Difficulty::Easy => 3,
                Difficulty::Medium => 5,
                Difficulty::Hard => 7,
            }),
        }
    }

    pub fn score_multiplier(&self) -> f64 {
        match self {
            GameMode::Classic => 1.0,
            GameMode::Challenge => 1.5,
            GameMode::Expert => 2.0,
        }
    }

    pub fn from_name(name: &str) -> Option<GameMode> {
        match name.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "challenge" => Some(GameMode::Challenge),
            "expert" => Some(GameMode::Expert),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Challenge => "Challenge",
            GameMode::Expert => "Expert",
        }
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

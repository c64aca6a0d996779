use serde::{Deserialize, Serialize};

/// Lifetime counters, persisted between sessions. Every field defaults to
/// zero on its own so a partial or stale blob still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub total_games: u32,
}

impl Statistics {
    pub fn record_win(&mut self, score: u32) {
        self.games_won += 1;
        self.total_games += 1;
        if score > self.high_score {
            self.high_score = score;
        }
    }

    pub fn record_loss(&mut self) {
        self.games_lost += 1;
        self.total_games += 1;
    }
}

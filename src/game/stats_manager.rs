use log::{error, trace};

use crate::model::Statistics;
use crate::storage::KeyValueStore;

/// The single fixed key the statistics blob lives under.
pub const STATS_KEY: &str = "stats";

/// Owns the persisted statistics record: loaded once at construction,
/// written back immediately after every round-terminal mutation.
pub struct StatsManager {
    store: Box<dyn KeyValueStore>,
    stats: Statistics,
}

impl StatsManager {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let stats = Self::load(store.as_ref());
        Self { store, stats }
    }

    fn load(store: &dyn KeyValueStore) -> Statistics {
        match store.get(STATS_KEY) {
            Some(blob) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                error!(target: "stats", "Discarding malformed stats blob: {}", e);
                Statistics::default()
            }),
            None => Statistics::default(),
        }
    }

    fn save(&mut self) {
        match serde_json::to_string(&self.stats) {
            Ok(blob) => {
                if let Err(e) = self.store.set(STATS_KEY, &blob) {
                    error!(target: "stats", "Failed to persist stats: {}", e);
                }
            }
            Err(e) => error!(target: "stats", "Failed to serialize stats: {}", e),
        }
    }

    pub fn record_win(&mut self, score: u32) {
        self.stats.record_win(score);
        trace!(target: "stats", "Recorded win, stats now {:?}", self.stats);
        self.save();
    }

    pub fn record_loss(&mut self) {
        self.stats.record_loss();
        trace!(target: "stats", "Recorded loss, stats now {:?}", self.stats);
        self.save();
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

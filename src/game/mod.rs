pub mod draw_pool;
pub mod game_engine;
pub mod scoring;
pub mod stats_manager;

pub use game_engine::{GameEngine, RoundPhase};
pub use stats_manager::StatsManager;

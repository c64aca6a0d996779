use super::{AttemptLimit, Difficulty, GameMode, GuessOutcome, Statistics};

/// Broadcast to the presentation layer. The engine never reads or writes
/// presentation state; whatever a front end needs rides on these.
#[derive(Debug, Clone)]
pub enum GameEngineEvent {
    RoundStarted {
        difficulty: Difficulty,
        mode: GameMode,
        attempt_limit: AttemptLimit,
        /// Numbers drawn so far this session, for progress display.
        drawn: usize,
        pool_size: usize,
    },
    PoolExhausted {
        difficulty: Difficulty,
    },
    GuessEvaluated(GuessOutcome),
    StatsChanged(Statistics),
}

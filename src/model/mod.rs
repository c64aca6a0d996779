mod attempt_limit;
mod difficulty;
mod game_error;
mod game_engine_event;
mod game_mode;
mod guess_outcome;
mod proximity;
mod statistics;

pub use attempt_limit::AttemptLimit;
pub use difficulty::Difficulty;
pub use game_error::{GameError, ValidationError};
pub use game_engine_event::GameEngineEvent;
pub use game_mode::GameMode;
pub use guess_outcome::GuessOutcome;
pub use proximity::Proximity;
pub use statistics::Statistics;

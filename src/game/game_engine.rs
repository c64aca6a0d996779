use log::{info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::draw_pool::DrawPool;
use super::scoring;
use super::stats_manager::StatsManager;
use crate::events::EventEmitter;
use crate::model::{
    AttemptLimit, Difficulty, GameEngineEvent, GameError, GameMode, GuessOutcome, Proximity,
    Statistics, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Open,
    Won,
    Lost,
    /// No secret available: the whole range has been drawn already.
    Exhausted,
}

/// The whole game state machine: configuration, round state, the
/// draw-without-replacement history, scoring and statistics updates.
/// Presentation is reached only through the event emitter.
pub struct GameEngine {
    difficulty: Difficulty,
    mode: GameMode,
    pool: DrawPool,
    attempts: u32,
    secret: Option<u32>,
    phase: RoundPhase,
    score: u32,
    rng: StdRng,
    stats_manager: StatsManager,
    event_emitter: EventEmitter<GameEngineEvent>,
}

impl GameEngine {
    pub fn new(
        stats_manager: StatsManager,
        event_emitter: EventEmitter<GameEngineEvent>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().next_u64());
        trace!(target: "game_engine", "Engine seed: {}", seed);
        let mut engine = Self {
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
            pool: DrawPool::new(),
            attempts: 0,
            secret: None,
            phase: RoundPhase::Open,
            score: 0,
            rng: StdRng::seed_from_u64(seed),
            stats_manager,
            event_emitter,
        };
        // An empty history can never exhaust the opening draw.
        let _ = engine.start_round(engine.difficulty, engine.mode);
        engine
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }

    /// Applies the configuration and opens a fresh round: attempts, phase
    /// and score reset, a new secret drawn. A difficulty change clears the
    /// drawn history since the numeric range changed; a mode change keeps
    /// it.
    pub fn start_round(
        &mut self,
        difficulty: Difficulty,
        mode: GameMode,
    ) -> Result<(), GameError> {
        if difficulty != self.difficulty {
            self.pool.reset();
        }
        self.difficulty = difficulty;
        self.mode = mode;
        self.attempts = 0;
        self.score = 0;

        match self.pool.draw(difficulty, &mut self.rng) {
            Some(secret) => {
                trace!(
                    target: "game_engine",
                    "New round: {}/{}, {} of {} numbers drawn",
                    difficulty,
                    mode,
                    self.pool.drawn_count(),
                    difficulty.range_size()
                );
                self.secret = Some(secret);
                self.phase = RoundPhase::Open;
                self.event_emitter.emit(&GameEngineEvent::RoundStarted {
                    difficulty,
                    mode,
                    attempt_limit: self.attempt_limit(),
                    drawn: self.pool.drawn_count(),
                    pool_size: difficulty.range_size() as usize,
                });
                Ok(())
            }
            None => {
                info!(target: "game_engine", "Draw pool exhausted for {}", difficulty);
                self.secret = None;
                self.phase = RoundPhase::Exhausted;
                self.event_emitter
                    .emit(&GameEngineEvent::PoolExhausted { difficulty });
                Err(GameError::ExhaustedPool)
            }
        }
    }

    /// Difficulty changes clear the drawn history and start a fresh round.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.start_round(difficulty, self.mode)
    }

    /// Mode changes start a fresh round; the drawn history survives.
    pub fn change_mode(&mut self, mode: GameMode) -> Result<(), GameError> {
        self.start_round(self.difficulty, mode)
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.start_round(self.difficulty, self.mode)
    }

    /// Parses raw text into a guess. Garbage reports a validation error
    /// without touching any state.
    pub fn submit_input(&mut self, raw: &str) -> Result<GuessOutcome, GameError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
        self.submit_guess(value)
    }

    pub fn submit_guess(&mut self, value: i64) -> Result<GuessOutcome, GameError> {
        if matches!(self.phase, RoundPhase::Won | RoundPhase::Lost) {
            return Err(ValidationError::RoundOver.into());
        }
        if !self.difficulty.contains(value) {
            return Err(ValidationError::OutOfRange {
                value,
                min: self.difficulty.min(),
                max: self.difficulty.max(),
            }
            .into());
        }
        let Some(secret) = self.secret else {
            return Ok(self.evaluated(GuessOutcome::Exhausted));
        };
        let guess = value as u32;

        self.attempts += 1;
        trace!(target: "game_engine", "Attempt {}: guessed {}", self.attempts, guess);

        // Equality is checked before attempt exhaustion: the last permitted
        // guess still wins if it is correct.
        let outcome = if guess == secret {
            self.phase = RoundPhase::Won;
            self.score = scoring::score(self.attempts, self.difficulty, self.mode);
            self.stats_manager.record_win(self.score);
            self.emit_stats();
            GuessOutcome::Correct {
                attempts: self.attempts,
                score: self.score,
            }
        } else if self.attempt_limit().is_spent(self.attempts) {
            self.phase = RoundPhase::Lost;
            self.stats_manager.record_loss();
            self.emit_stats();
            GuessOutcome::Lost { secret }
        } else {
            let proximity = Proximity::classify(guess, secret, self.difficulty.range_size());
            let remaining = self.attempt_limit().remaining_after(self.attempts);
            if guess > secret {
                GuessOutcome::Lower {
                    proximity,
                    remaining,
                }
            } else {
                GuessOutcome::Higher {
                    proximity,
                    remaining,
                }
            }
        };
        Ok(self.evaluated(outcome))
    }

    fn evaluated(&self, outcome: GuessOutcome) -> GuessOutcome {
        self.event_emitter
            .emit(&GameEngineEvent::GuessEvaluated(outcome.clone()));
        outcome
    }

    fn emit_stats(&self) {
        self.event_emitter
            .emit(&GameEngineEvent::StatsChanged(self.stats().clone()));
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempt_limit(&self) -> AttemptLimit {
        self.mode.attempt_limit(self.difficulty)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_round_over(&self) -> bool {
        self.phase != RoundPhase::Open
    }

    pub fn last_score(&self) -> u32 {
        self.score
    }

    pub fn drawn_count(&self) -> usize {
        self.pool.drawn_count()
    }

    pub fn stats(&self) -> &Statistics {
        self.stats_manager.stats()
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> Option<u32> {
        self.secret
    }

    #[cfg(test)]
    pub(crate) fn force_secret(&mut self, secret: u32) {
        self.secret = Some(secret);
    }
}

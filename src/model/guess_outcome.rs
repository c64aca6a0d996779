use super::{AttemptLimit, Proximity};

/// What a submitted guess produced. `Higher` and `Lower` describe where
/// the secret sits relative to the guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { attempts: u32, score: u32 },
    Lost { secret: u32 },
    Higher { proximity: Proximity, remaining: AttemptLimit },
    Lower { proximity: Proximity, remaining: AttemptLimit },
    Exhausted,
}

impl GuessOutcome {
    /// Whether the round can accept further guesses after this outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Correct { .. } | GuessOutcome::Lost { .. } | GuessOutcome::Exhausted
        )
    }
}

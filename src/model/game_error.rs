use thiserror::Error;

/// A rejected guess. The round state is untouched whenever one of these
/// is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{value} is outside the range {min} to {max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
    #[error("the round is already over")]
    RoundOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Every number in the active range has already been drawn. Reported
    /// as information, not a failure; a difficulty change reshuffles.
    #[error("every number in the range has already been drawn")]
    ExhaustedPool,
}

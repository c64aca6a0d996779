use crate::model::{Difficulty, GameMode};

const BASE_SCORE: f64 = 1000.0;
const ATTEMPT_PENALTY: f64 = 50.0;
const MINIMUM_SCORE: f64 = 100.0;

/// Score for a win on the given attempt. The first attempt carries no
/// penalty; the floor applies after both multipliers.
pub fn score(attempts: u32, difficulty: Difficulty, mode: GameMode) -> u32 {
    let penalty = attempts.saturating_sub(1) as f64 * ATTEMPT_PENALTY;
    let raw = (BASE_SCORE - penalty) * difficulty.score_multiplier() * mode.score_multiplier();
    raw.max(MINIMUM_SCORE).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attempt_easy_classic() {
        assert_eq!(score(1, Difficulty::Easy, GameMode::Classic), 1000);
    }

    #[test]
    fn test_fifth_attempt_hard_expert() {
        assert_eq!(score(5, Difficulty::Hard, GameMode::Expert), 4800);
    }

    #[test]
    fn test_fifth_attempt_easy_challenge() {
        assert_eq!(score(5, Difficulty::Easy, GameMode::Challenge), 1200);
    }

    #[test]
    fn test_mode_multiplier_rounds_to_nearest() {
        // (1000 - 50) * 1.5 = 1425, no rounding needed; 3 attempts gives
        // (1000 - 100) * 1.5 = 1350.
        assert_eq!(score(2, Difficulty::Easy, GameMode::Challenge), 1425);
        assert_eq!(score(3, Difficulty::Easy, GameMode::Challenge), 1350);
    }

    #[test]
    fn test_score_never_drops_below_floor() {
        assert_eq!(score(30, Difficulty::Easy, GameMode::Classic), 100);
        assert_eq!(score(500, Difficulty::Hard, GameMode::Expert), 100);
    }
}

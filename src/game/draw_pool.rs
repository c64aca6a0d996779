use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::model::Difficulty;

/// Draw-without-replacement history for the active difficulty. A number,
/// once drawn, stays out of play until the history is reset.
#[derive(Debug, Default)]
pub struct DrawPool {
    drawn: HashSet<u32>,
}

impl DrawPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uniform draw from the difficulty range, excluding history. `None`
    /// once every number in the range has been drawn.
    pub fn draw(&mut self, difficulty: Difficulty, rng: &mut StdRng) -> Option<u32> {
        let candidates: Vec<u32> = difficulty
            .range()
            .filter(|n| !self.drawn.contains(n))
            .collect();
        let number = candidates.choose(rng).copied()?;
        self.drawn.insert(number);
        Some(number)
    }

    pub fn reset(&mut self) {
        self.drawn.clear();
    }

    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    pub fn is_exhausted(&self, difficulty: Difficulty) -> bool {
        self.drawn.len() >= difficulty.range_size() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_draws_stay_in_range_and_never_repeat() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::new();
        let mut seen = HashSet::new();

        for _ in 0..Difficulty::Easy.range_size() {
            let number = pool.draw(Difficulty::Easy, &mut rng).unwrap();
            assert!(Difficulty::Easy.range().contains(&number));
            assert!(seen.insert(number), "{} drawn twice", number);
        }
    }

    #[test]
    fn test_exhaustion_after_full_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::new();

        for _ in 0..Difficulty::Easy.range_size() {
            assert!(pool.draw(Difficulty::Easy, &mut rng).is_some());
        }
        assert!(pool.is_exhausted(Difficulty::Easy));
        assert_eq!(pool.draw(Difficulty::Easy, &mut rng), None);
    }

    #[test]
    fn test_history_never_exceeds_range_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = DrawPool::new();

        for _ in 0..20 {
            let _ = pool.draw(Difficulty::Easy, &mut rng);
        }
        assert_eq!(pool.drawn_count(), Difficulty::Easy.range_size() as usize);
    }

    #[test]
    fn test_reset_reopens_the_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = DrawPool::new();

        while pool.draw(Difficulty::Easy, &mut rng).is_some() {}
        pool.reset();
        assert_eq!(pool.drawn_count(), 0);
        assert!(pool.draw(Difficulty::Easy, &mut rng).is_some());
    }
}

/// Hint tier for a wrong guess, hottest first. Tiers are discrete; there
/// is no interpolation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Proximity {
    VeryHot,
    Hot,
    Warm,
    Cold,
}

impl Proximity {
    /// Tier from the distance between guess and secret, relative to the
    /// size of the guessing range.
    pub fn classify(guess: u32, secret: u32, range_size: u32) -> Proximity {
        let distance = guess.abs_diff(secret) as f64;
        let range = range_size as f64;
        if distance <= range * 0.1 {
            Proximity::VeryHot
        } else if distance <= range * 0.2 {
            Proximity::Hot
        } else if distance <= range * 0.4 {
            Proximity::Warm
        } else {
            Proximity::Cold
        }
    }
}

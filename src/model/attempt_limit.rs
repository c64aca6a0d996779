use std::fmt::Display;

/// Attempt budget for a round. Explicit variant instead of a sentinel
/// number so nothing ever does arithmetic on "infinity".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLimit {
    Unlimited,
    Limited(u32),
}

impl AttemptLimit {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, AttemptLimit::Unlimited)
    }

    /// Budget left after `attempts` tries.
    pub fn remaining_after(&self, attempts: u32) -> AttemptLimit {
        match self {
            AttemptLimit::Unlimited => AttemptLimit::Unlimited,
            AttemptLimit::Limited(max) => AttemptLimit::Limited(max.saturating_sub(attempts)),
        }
    }

    /// Whether `attempts` tries have used up the whole budget. An unlimited
    /// budget is never spent.
    pub fn is_spent(&self, attempts: u32) -> bool {
        match self {
            AttemptLimit::Unlimited => false,
            AttemptLimit::Limited(max) => attempts >= *max,
        }
    }
}

impl Display for AttemptLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptLimit::Unlimited => write!(f, "unlimited"),
            AttemptLimit::Limited(max) => write!(f, "{}", max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_is_never_spent() {
        assert!(!AttemptLimit::Unlimited.is_spent(0));
        assert!(!AttemptLimit::Unlimited.is_spent(10_000));
    }

    #[test]
    fn test_limited_spends_at_boundary() {
        let limit = AttemptLimit::Limited(3);
        assert!(!limit.is_spent(2));
        assert!(limit.is_spent(3));
        assert!(limit.is_spent(4));
    }

    #[test]
    fn test_remaining_after() {
        assert_eq!(
            AttemptLimit::Limited(5).remaining_after(2),
            AttemptLimit::Limited(3)
        );
        assert_eq!(
            AttemptLimit::Limited(5).remaining_after(7),
            AttemptLimit::Limited(0)
        );
        assert_eq!(
            AttemptLimit::Unlimited.remaining_after(99),
            AttemptLimit::Unlimited
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credibility score clamped to [0, 100].
/// Represents how reliably a user's task submissions hold up under review.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: u8 = 0;
    /// Highest possible score.
    pub const MAX: u8 = 100;

    /// Create a new Score, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Get the raw value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Apply a signed delta, saturating at the [0, 100] bounds.
    pub fn apply_delta(self, delta: i32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// The delta that `apply_delta` would actually produce after clamping.
    /// This is what a review record must store so reversal is exact.
    pub fn effective_delta(self, delta: i32) -> i32 {
        self.apply_delta(delta).0 as i32 - self.0 as i32
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Self::new(value as i64)
    }
}

impl From<Score> for u8 {
    fn from(s: Score) -> Self {
        s.0
    }
}

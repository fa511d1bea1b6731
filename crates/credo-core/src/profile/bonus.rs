use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-boxed conversion-rate multiplier unlocked by recovering from a low
/// score. At most one exists per profile at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionBonus {
    pub multiplier: f64,
    pub expires_at: DateTime<Utc>,
    /// True when the bonus was unlocked after a dip below the at-risk
    /// threshold (the only unlock path today; kept explicit for audit).
    pub unlocked_from_low_watermark: bool,
}

impl RedemptionBonus {
    /// Whether the bonus still contributes at `now`. Expiry is evaluated
    /// against the passed-in time, never a cached flag.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

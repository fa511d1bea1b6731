use serde::{Deserialize, Serialize};

use super::defaults;

/// Redemption bonus policy: thresholds, multiplier, lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedemptionConfig {
    /// Score below which a profile counts as at risk. Crossing below this
    /// arms the redemption flag and fires the low-credibility warning.
    pub at_risk_threshold: u8,
    /// Score a recovered profile must reach to unlock the bonus.
    pub unlock_threshold: u8,
    pub bonus_multiplier: f64,
    pub bonus_duration_days: i64,
}

impl Default for RedemptionConfig {
    fn default() -> Self {
        Self {
            at_risk_threshold: defaults::DEFAULT_AT_RISK_THRESHOLD,
            unlock_threshold: defaults::DEFAULT_UNLOCK_THRESHOLD,
            bonus_multiplier: defaults::DEFAULT_BONUS_MULTIPLIER,
            bonus_duration_days: defaults::DEFAULT_BONUS_DURATION_DAYS,
        }
    }
}

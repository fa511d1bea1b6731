use chrono::{DateTime, Utc};

use credo_core::config::CredoConfig;
use credo_core::profile::CredibilityProfile;
use credo_core::tier::Tier;

use crate::rate::{self, RateBreakdown};

/// Conversion calculator binding a config so callers hold one handle instead
/// of threading the config through every call site.
pub struct ConversionCalculator {
    config: CredoConfig,
}

impl ConversionCalculator {
    /// Create a calculator over the given config.
    pub fn new(config: CredoConfig) -> Self {
        Self { config }
    }

    /// The bound config.
    pub fn config(&self) -> &CredoConfig {
        &self.config
    }

    /// Effective XP-to-minutes rate at `now`.
    pub fn effective_rate(&self, profile: &CredibilityProfile, now: DateTime<Utc>) -> f64 {
        rate::effective_rate(profile, &self.config, now)
    }

    /// Convert earned XP into whole minutes at `now`.
    pub fn xp_to_minutes(&self, xp: u32, profile: &CredibilityProfile, now: DateTime<Utc>) -> u32 {
        rate::xp_to_minutes(xp, profile, &self.config, now)
    }

    /// Display form of the effective rate, e.g. `"1.3x"`.
    pub fn formatted_rate(&self, profile: &CredibilityProfile, now: DateTime<Utc>) -> String {
        rate::formatted_rate(profile, &self.config, now)
    }

    /// Per-factor rate breakdown for observability.
    pub fn rate_breakdown(
        &self,
        profile: &CredibilityProfile,
        now: DateTime<Utc>,
    ) -> RateBreakdown {
        rate::rate_breakdown(profile, &self.config, now)
    }

    /// The tier for the profile's current score.
    pub fn tier<'a>(&'a self, profile: &CredibilityProfile) -> &'a Tier {
        self.config.tiers.resolve(profile.score)
    }
}

impl Default for ConversionCalculator {
    fn default() -> Self {
        Self::new(CredoConfig::default())
    }
}

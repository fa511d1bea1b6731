use chrono::{DateTime, Utc};

use credo_core::config::CredoConfig;
use credo_core::profile::CredibilityProfile;

/// Effective XP-to-minutes rate.
///
/// ```text
/// rate = tier.multiplier × (bonus.multiplier if bonus active at now else 1.0)
/// ```
///
/// Bonus activity is evaluated against the passed-in `now`, never a cached
/// flag, so an expired bonus stops contributing the instant it lapses even if
/// no sweep has run.
pub fn effective_rate(
    profile: &CredibilityProfile,
    config: &CredoConfig,
    now: DateTime<Utc>,
) -> f64 {
    let tier = config.tiers.resolve(profile.score);
    let bonus = profile
        .redemption_bonus
        .as_ref()
        .filter(|b| b.is_active(now))
        .map(|b| b.multiplier)
        .unwrap_or(1.0);
    tier.multiplier * bonus
}

/// Convert earned XP into whole screen-time minutes.
///
/// Floor, never round up: the session timer cannot represent fractional
/// minutes, and granting the extra partial minute would drift in the child's
/// favor on every conversion.
pub fn xp_to_minutes(
    xp: u32,
    profile: &CredibilityProfile,
    config: &CredoConfig,
    now: DateTime<Utc>,
) -> u32 {
    let rate = effective_rate(profile, config, now);
    let minutes = (xp as f64 * rate) / config.conversion.xp_per_minute as f64;
    minutes.floor() as u32
}

/// Display form of the effective rate, e.g. `"1.3x"`. Purely presentational,
/// derived on demand, never stored.
pub fn formatted_rate(
    profile: &CredibilityProfile,
    config: &CredoConfig,
    now: DateTime<Utc>,
) -> String {
    format_rate(effective_rate(profile, config, now))
}

fn format_rate(rate: f64) -> String {
    let mut s = format!("{:.2}", rate);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    format!("{}x", s)
}

/// Per-factor view of the rate for observability.
#[derive(Debug, Clone)]
pub struct RateBreakdown {
    pub tier_name: String,
    pub tier_multiplier: f64,
    pub bonus_multiplier: f64,
    pub bonus_active: bool,
    pub effective_rate: f64,
}

/// Compute the rate with a full breakdown of each factor.
pub fn rate_breakdown(
    profile: &CredibilityProfile,
    config: &CredoConfig,
    now: DateTime<Utc>,
) -> RateBreakdown {
    let tier = config.tiers.resolve(profile.score);
    let active_bonus = profile
        .redemption_bonus
        .as_ref()
        .filter(|b| b.is_active(now));
    let bonus_multiplier = active_bonus.map(|b| b.multiplier).unwrap_or(1.0);

    RateBreakdown {
        tier_name: tier.name.clone(),
        tier_multiplier: tier.multiplier,
        bonus_multiplier,
        bonus_active: active_bonus.is_some(),
        effective_rate: tier.multiplier * bonus_multiplier,
    }
}

//! # credo-conversion
//!
//! Pure conversion math: (tier, active bonus) → effective XP-to-minutes rate.
//! Time is always passed in; a stale bonus contributes nothing regardless of
//! whether an expiry sweep has run yet.

pub mod calculator;
pub mod rate;

pub use calculator::ConversionCalculator;
pub use rate::{effective_rate, formatted_rate, rate_breakdown, xp_to_minutes, RateBreakdown};

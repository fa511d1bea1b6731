//! Expiry reminder schedule contract.
//!
//! The engine performs no background scheduling; the notification
//! collaborator converts these offsets into locally scheduled alerts and
//! re-checks via `sweep_expired_bonus` on foreground.

use chrono::{DateTime, Duration, Utc};

use credo_core::profile::CredibilityProfile;

/// Hours before expiry at which reminders fire.
pub const REMINDER_OFFSET_HOURS: [i64; 3] = [24, 6, 1];

/// Reminder offsets before an expiry, largest first.
pub fn reminder_offsets() -> [Duration; 3] {
    REMINDER_OFFSET_HOURS.map(Duration::hours)
}

/// Concrete reminder times for a bonus expiring at `expires_at`, ascending.
pub fn reminder_times(expires_at: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    reminder_offsets()
        .iter()
        .map(|offset| expires_at - *offset)
        .collect()
}

/// Remaining bonus lifetime at `now`. None when no bonus is active.
pub fn time_until_expiry(profile: &CredibilityProfile, now: DateTime<Utc>) -> Option<Duration> {
    profile
        .redemption_bonus
        .as_ref()
        .filter(|b| b.is_active(now))
        .map(|b| b.expires_at - now)
}

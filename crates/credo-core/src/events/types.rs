//! Event payload types for all credibility domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::Score;

/// Payload for `on_task_approved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskApprovedEvent {
    pub task_id: String,
    pub points_gained: i32,
    pub previous_score: Score,
    pub new_score: Score,
    pub current_streak: u32,
}

/// Payload for `on_task_rejected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRejectedEvent {
    pub task_id: String,
    /// Magnitude of the applied penalty, after clamping.
    pub points_lost: i32,
    pub previous_score: Score,
    pub new_score: Score,
    pub can_appeal: bool,
}

/// Payload for `on_streak_bonus_awarded`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakBonusAwardedEvent {
    pub streak_count: u32,
    pub bonus_points: i32,
    pub new_score: Score,
}

/// Payload for `on_tier_improved`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierImprovedEvent {
    pub old_tier: String,
    pub new_tier: String,
    pub new_score: Score,
}

/// Payload for `on_low_credibility_warning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowCredibilityWarningEvent {
    pub score: Score,
    pub tier: String,
    /// Effective XP-to-minutes rate at the time of the warning.
    pub conversion_rate: f64,
}

/// Payload for `on_redemption_bonus_unlocked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionBonusUnlockedEvent {
    pub score: Score,
    pub multiplier: f64,
    pub expiry_days: i64,
}

/// Payload for `on_redemption_bonus_expired`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionBonusExpiredEvent {
    pub expired_at: DateTime<Utc>,
}

/// A domain event as returned from engine operations.
///
/// Operations return their events in emission order; the caller decides when
/// and where to dispatch them (the engine never awaits delivery).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CredibilityEvent {
    TaskApproved(TaskApprovedEvent),
    TaskRejected(TaskRejectedEvent),
    StreakBonusAwarded(StreakBonusAwardedEvent),
    TierImproved(TierImprovedEvent),
    LowCredibilityWarning(LowCredibilityWarningEvent),
    RedemptionBonusUnlocked(RedemptionBonusUnlockedEvent),
    RedemptionBonusExpired(RedemptionBonusExpiredEvent),
}

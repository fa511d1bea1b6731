//! Sink contract for the notification collaborator.

use super::types::*;

/// Handler for credibility domain events.
///
/// Every hook has a no-op default, so a sink implements only the events it
/// cares about. Handlers must be cheap and non-blocking — delivery happens on
/// the caller's thread, never awaited by the engine.
pub trait CredibilityEventHandler: Send + Sync {
    fn on_task_approved(&self, _event: &TaskApprovedEvent) {}
    fn on_task_rejected(&self, _event: &TaskRejectedEvent) {}
    fn on_streak_bonus_awarded(&self, _event: &StreakBonusAwardedEvent) {}
    fn on_tier_improved(&self, _event: &TierImprovedEvent) {}
    fn on_low_credibility_warning(&self, _event: &LowCredibilityWarningEvent) {}
    fn on_redemption_bonus_unlocked(&self, _event: &RedemptionBonusUnlockedEvent) {}
    fn on_redemption_bonus_expired(&self, _event: &RedemptionBonusExpiredEvent) {}
}

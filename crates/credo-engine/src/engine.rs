//! CredibilityEngine — processes review decisions against one owned profile.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use credo_core::config::CredoConfig;
use credo_core::errors::ReviewError;
use credo_core::events::{
    CredibilityEvent, LowCredibilityWarningEvent, RedemptionBonusExpiredEvent,
    RedemptionBonusUnlockedEvent, StreakBonusAwardedEvent, TaskApprovedEvent, TaskRejectedEvent,
    TierImprovedEvent,
};
use credo_core::models::{ApprovalOutcome, RejectionOutcome, UndoOutcome};
use credo_core::profile::{
    CredibilityProfile, RedemptionBonus, ReviewKey, ReviewOutcome, ReviewRecord, Score,
};
use credo_core::tier::Tier;

use crate::schedule;

/// Single-writer credibility state machine for one user.
///
/// The four mutating operations take the write lock, validate every
/// precondition before the first mutation, and return the emitted events to
/// the caller — an operation either fully applies or fails with no state
/// change. Reads clone a consistent snapshot under the read lock.
pub struct CredibilityEngine {
    user_id: String,
    config: Arc<CredoConfig>,
    profile: RwLock<CredibilityProfile>,
}

impl CredibilityEngine {
    /// Create an engine with a fresh profile at the configured starting score.
    pub fn new(user_id: impl Into<String>, config: Arc<CredoConfig>) -> Self {
        let starting = Score::new(config.policy.starting_score as i64);
        Self {
            user_id: user_id.into(),
            config,
            profile: RwLock::new(CredibilityProfile::new(starting)),
        }
    }

    /// Create an engine over a previously persisted profile.
    pub fn with_profile(
        user_id: impl Into<String>,
        config: Arc<CredoConfig>,
        profile: CredibilityProfile,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            config,
            profile: RwLock::new(profile),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn config(&self) -> &CredoConfig {
        &self.config
    }

    // ---- Mutating operations ----

    /// Process an approval for a (task, reviewer) pair.
    pub fn process_approval(
        &self,
        task_id: &str,
        reviewer_id: &str,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<ApprovalOutcome, ReviewError> {
        let mut profile = self.write_profile();

        let key = ReviewKey::new(task_id, reviewer_id);
        if profile.ledger.contains(&key) {
            return Err(ReviewError::DuplicateReview {
                task_id: task_id.to_string(),
                reviewer_id: reviewer_id.to_string(),
            });
        }

        let policy = &self.config.policy;
        let previous_score = profile.score;
        let streak_before = profile.consecutive_approvals;
        let mut events = Vec::new();

        // Base points, clamped; the post-clamp delta is what the record keeps.
        let base_delta = profile.score.effective_delta(policy.approval_points);
        profile.score = profile.score.apply_delta(base_delta);
        profile.consecutive_approvals += 1;
        let streak = profile.consecutive_approvals;
        let score_after_base = profile.score;

        events.push(CredibilityEvent::TaskApproved(TaskApprovedEvent {
            task_id: task_id.to_string(),
            points_gained: base_delta,
            previous_score,
            new_score: score_after_base,
            current_streak: streak,
        }));

        // Streak bonus: the streak moves in steps of 1, so each multiple of
        // the interval is crossed at most once per streak run.
        let mut bonus_delta = 0;
        if streak % policy.streak_interval == 0 {
            bonus_delta = profile.score.effective_delta(policy.streak_bonus_points);
            profile.score = profile.score.apply_delta(bonus_delta);
            events.push(CredibilityEvent::StreakBonusAwarded(StreakBonusAwardedEvent {
                streak_count: streak,
                bonus_points: bonus_delta,
                new_score: profile.score,
            }));
        }

        profile.ledger.insert(ReviewRecord {
            task_id: task_id.to_string(),
            reviewer_id: reviewer_id.to_string(),
            outcome: ReviewOutcome::Approved,
            points_delta: base_delta + bonus_delta,
            streak_before,
            notes,
            timestamp: now,
            reversed: false,
        });

        let old_tier = self.config.tiers.resolve(previous_score).clone();
        let new_tier = self.config.tiers.resolve(profile.score).clone();
        if new_tier.min > old_tier.min {
            events.push(CredibilityEvent::TierImproved(TierImprovedEvent {
                old_tier: old_tier.name.clone(),
                new_tier: new_tier.name.clone(),
                new_score: profile.score,
            }));
        }

        self.check_redemption_unlock(&mut profile, now, &mut events);

        info!(
            user = %self.user_id,
            task = task_id,
            score_before = %previous_score,
            score_after = %profile.score,
            streak,
            "approval applied"
        );

        Ok(ApprovalOutcome {
            previous_score,
            new_score: profile.score,
            tier: new_tier,
            current_streak: streak,
            events,
        })
    }

    /// Process a rejection for a (task, reviewer) pair.
    pub fn process_rejection(
        &self,
        task_id: &str,
        reviewer_id: &str,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<RejectionOutcome, ReviewError> {
        let mut profile = self.write_profile();

        let key = ReviewKey::new(task_id, reviewer_id);
        if profile.ledger.contains(&key) {
            return Err(ReviewError::DuplicateReview {
                task_id: task_id.to_string(),
                reviewer_id: reviewer_id.to_string(),
            });
        }

        let policy = &self.config.policy;
        let redemption = &self.config.redemption;
        let previous_score = profile.score;
        let streak_before = profile.consecutive_approvals;
        let mut events = Vec::new();

        let delta = profile.score.effective_delta(-policy.rejection_penalty);
        profile.score = profile.score.apply_delta(delta);
        profile.consecutive_approvals = 0;

        profile.ledger.insert(ReviewRecord {
            task_id: task_id.to_string(),
            reviewer_id: reviewer_id.to_string(),
            outcome: ReviewOutcome::Rejected,
            points_delta: delta,
            streak_before,
            notes,
            timestamp: now,
            reversed: false,
        });

        // Every rejection is appealable by policy.
        let can_appeal = true;
        events.push(CredibilityEvent::TaskRejected(TaskRejectedEvent {
            task_id: task_id.to_string(),
            points_lost: -delta,
            previous_score,
            new_score: profile.score,
            can_appeal,
        }));

        // At-risk crossing: fires once per dip, on the crossing itself.
        let at_risk = redemption.at_risk_threshold;
        if profile.score.value() < at_risk && previous_score.value() >= at_risk {
            profile.had_low_score_since_last_bonus = true;
            let tier = self.config.tiers.resolve(profile.score);
            let rate = credo_conversion::effective_rate(&profile, &self.config, now);
            events.push(CredibilityEvent::LowCredibilityWarning(
                LowCredibilityWarningEvent {
                    score: profile.score,
                    tier: tier.name.clone(),
                    conversion_rate: rate,
                },
            ));
        }

        info!(
            user = %self.user_id,
            task = task_id,
            score_before = %previous_score,
            score_after = %profile.score,
            "rejection applied"
        );

        Ok(RejectionOutcome {
            previous_score,
            new_score: profile.score,
            can_appeal,
            events,
        })
    }

    /// Undo a previously processed rejection.
    ///
    /// Reverses exactly the stored points delta and restores the pre-rejection
    /// streak. The low-score flag is not cleared: the dip happened, and a
    /// recovery from it still counts as redemption.
    pub fn undo_rejection(
        &self,
        task_id: &str,
        reviewer_id: &str,
    ) -> Result<UndoOutcome, ReviewError> {
        let mut profile = self.write_profile();

        let key = ReviewKey::new(task_id, reviewer_id);
        let record = match profile.ledger.get(&key) {
            None => {
                return Err(ReviewError::NoSuchReview {
                    task_id: task_id.to_string(),
                    reviewer_id: reviewer_id.to_string(),
                })
            }
            Some(record) => record,
        };
        if record.outcome != ReviewOutcome::Rejected {
            return Err(ReviewError::NotRejected {
                task_id: task_id.to_string(),
                reviewer_id: reviewer_id.to_string(),
            });
        }
        if record.reversed {
            return Err(ReviewError::AlreadyReversed {
                task_id: task_id.to_string(),
                reviewer_id: reviewer_id.to_string(),
            });
        }

        let delta = record.points_delta;
        let restored_streak = record.streak_before;
        let previous_score = profile.score;

        profile.score = profile.score.apply_delta(-delta);
        profile.consecutive_approvals = restored_streak;
        profile.ledger.mark_reversed(&key);

        info!(
            user = %self.user_id,
            task = task_id,
            score_before = %previous_score,
            score_after = %profile.score,
            restored_streak,
            "rejection undone"
        );

        Ok(UndoOutcome {
            previous_score,
            new_score: profile.score,
            restored_streak,
        })
    }

    /// Clear an active bonus whose expiry has passed, returning the expiry
    /// event for the notification collaborator. Idempotent: returns `true` at
    /// most once per bonus lifecycle.
    pub fn sweep_expired_bonus_with_events(
        &self,
        now: DateTime<Utc>,
    ) -> (bool, Vec<CredibilityEvent>) {
        let mut profile = self.write_profile();

        let expired_at = match &profile.redemption_bonus {
            Some(bonus) if !bonus.is_active(now) => bonus.expires_at,
            _ => {
                debug!(user = %self.user_id, "bonus sweep: nothing to expire");
                return (false, Vec::new());
            }
        };

        profile.redemption_bonus = None;
        info!(user = %self.user_id, %expired_at, "redemption bonus expired");
        (
            true,
            vec![CredibilityEvent::RedemptionBonusExpired(
                RedemptionBonusExpiredEvent { expired_at },
            )],
        )
    }

    /// Bool-only form of the expiry sweep.
    pub fn sweep_expired_bonus(&self, now: DateTime<Utc>) -> bool {
        self.sweep_expired_bonus_with_events(now).0
    }

    // ---- Reads ----

    /// The tier for the current score. Always recomputed, never stored.
    pub fn current_tier(&self) -> Tier {
        let profile = self.read_profile();
        self.config.tiers.resolve(profile.score).clone()
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.read_profile().score
    }

    /// Effective XP-to-minutes rate at `now`. A stale bonus contributes
    /// nothing even before a sweep runs.
    pub fn effective_rate(&self, now: DateTime<Utc>) -> f64 {
        let profile = self.read_profile();
        credo_conversion::effective_rate(&profile, &self.config, now)
    }

    /// Remaining bonus lifetime at `now`, for the reminder scheduler.
    pub fn time_until_expiry(&self, now: DateTime<Utc>) -> Option<Duration> {
        let profile = self.read_profile();
        schedule::time_until_expiry(&profile, now)
    }

    /// Consistent copy of the profile for presentation and persistence.
    pub fn snapshot(&self) -> CredibilityProfile {
        self.read_profile().clone()
    }

    // ---- Internals ----

    fn check_redemption_unlock(
        &self,
        profile: &mut CredibilityProfile,
        now: DateTime<Utc>,
        events: &mut Vec<CredibilityEvent>,
    ) {
        let redemption = &self.config.redemption;
        if !profile.had_low_score_since_last_bonus {
            return;
        }
        if profile.score.value() < redemption.unlock_threshold {
            return;
        }
        // A new bonus cannot be unlocked while one is already active.
        if profile.redemption_bonus.is_some() {
            return;
        }

        let expires_at = now + Duration::days(redemption.bonus_duration_days);
        profile.redemption_bonus = Some(RedemptionBonus {
            multiplier: redemption.bonus_multiplier,
            expires_at,
            unlocked_from_low_watermark: true,
        });
        profile.had_low_score_since_last_bonus = false;

        info!(
            user = %self.user_id,
            score = %profile.score,
            multiplier = redemption.bonus_multiplier,
            %expires_at,
            "redemption bonus unlocked"
        );
        events.push(CredibilityEvent::RedemptionBonusUnlocked(
            RedemptionBonusUnlockedEvent {
                score: profile.score,
                multiplier: redemption.bonus_multiplier,
                expiry_days: redemption.bonus_duration_days,
            },
        ));
    }

    fn read_profile(&self) -> std::sync::RwLockReadGuard<'_, CredibilityProfile> {
        self.profile.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_profile(&self) -> std::sync::RwLockWriteGuard<'_, CredibilityProfile> {
        self.profile.write().unwrap_or_else(PoisonError::into_inner)
    }
}

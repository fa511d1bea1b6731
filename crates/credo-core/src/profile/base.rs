use serde::{Deserialize, Serialize};

use super::bonus::RedemptionBonus;
use super::ledger::ReviewLedger;
use super::score::Score;

/// Per-user credibility state. One instance per user, exclusively owned by
/// the engine and mutated only through its operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredibilityProfile {
    pub score: Score,
    /// Streak of approvals since the last rejection.
    pub consecutive_approvals: u32,
    pub ledger: ReviewLedger,
    /// At most one active time-boxed multiplier bonus.
    pub redemption_bonus: Option<RedemptionBonus>,
    /// Whether the score has dipped below the at-risk threshold since the
    /// last bonus was unlocked. Gates the redemption unlock so it only fires
    /// after a genuine recovery, not from an already-high score.
    pub had_low_score_since_last_bonus: bool,
}

impl CredibilityProfile {
    /// Create a fresh profile at the given starting score.
    pub fn new(starting_score: Score) -> Self {
        Self {
            score: starting_score,
            consecutive_approvals: 0,
            ledger: ReviewLedger::new(),
            redemption_bonus: None,
            had_low_score_since_last_bonus: false,
        }
    }
}

impl Default for CredibilityProfile {
    fn default() -> Self {
        Self::new(Score::default())
    }
}

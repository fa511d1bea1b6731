use serde::{Deserialize, Serialize};

use crate::events::CredibilityEvent;
use crate::profile::Score;
use crate::tier::Tier;

/// Result of a processed approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    pub previous_score: Score,
    pub new_score: Score,
    pub tier: Tier,
    pub current_streak: u32,
    /// Events emitted by this operation, in emission order. The caller owns
    /// dispatch.
    pub events: Vec<CredibilityEvent>,
}

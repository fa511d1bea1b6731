use serde::{Deserialize, Serialize};

use crate::events::CredibilityEvent;
use crate::profile::Score;

/// Result of a processed rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionOutcome {
    pub previous_score: Score,
    pub new_score: Score,
    /// Whether the child may appeal. Always true today: every rejection is
    /// appealable by policy.
    pub can_appeal: bool,
    pub events: Vec<CredibilityEvent>,
}

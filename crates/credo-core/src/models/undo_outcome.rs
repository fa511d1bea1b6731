use serde::{Deserialize, Serialize};

use crate::profile::Score;

/// Result of an undone rejection. An undo is an exact compensating action:
/// score and streak return to their pre-rejection values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndoOutcome {
    pub previous_score: Score,
    pub new_score: Score,
    /// Streak restored from the rejection's snapshot.
    pub restored_streak: u32,
}

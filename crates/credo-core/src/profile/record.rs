use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a review decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewOutcome {
    Approved,
    Rejected,
}

/// Ledger key: one record per (task, reviewer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewKey {
    pub task_id: String,
    pub reviewer_id: String,
}

impl ReviewKey {
    pub fn new(task_id: impl Into<String>, reviewer_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            reviewer_id: reviewer_id.into(),
        }
    }
}

/// A single review decision.
///
/// Records are append-mostly: a rejection may be reversed exactly once
/// (`reversed` flips to true), but records are never deleted, so the ledger
/// stays replayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub task_id: String,
    pub reviewer_id: String,
    pub outcome: ReviewOutcome,
    /// The signed score change this record actually caused, after clamping.
    /// Stored so a reversal restores the score exactly.
    pub points_delta: i32,
    /// Streak value immediately before this review was applied. The undo path
    /// restores this for rejections.
    pub streak_before: u32,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// True once undone. A reversed record cannot be reversed again.
    pub reversed: bool,
}

impl ReviewRecord {
    /// The ledger key for this record.
    pub fn key(&self) -> ReviewKey {
        ReviewKey::new(self.task_id.clone(), self.reviewer_id.clone())
    }

    /// Whether this record can still be undone.
    pub fn reversible(&self) -> bool {
        self.outcome == ReviewOutcome::Rejected && !self.reversed
    }
}

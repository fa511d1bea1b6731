use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring policy: point deltas, streak accounting, starting score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Points gained per approved task.
    pub approval_points: i32,
    /// Points lost per rejected task. Stored positive, applied negated.
    pub rejection_penalty: i32,
    /// A streak bonus fires every this many consecutive approvals.
    pub streak_interval: u32,
    /// Extra points per streak bonus.
    pub streak_bonus_points: i32,
    /// Score a freshly created profile starts at.
    pub starting_score: u8,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            approval_points: defaults::DEFAULT_APPROVAL_POINTS,
            rejection_penalty: defaults::DEFAULT_REJECTION_PENALTY,
            streak_interval: defaults::DEFAULT_STREAK_INTERVAL,
            streak_bonus_points: defaults::DEFAULT_STREAK_BONUS_POINTS,
            starting_score: defaults::DEFAULT_STARTING_SCORE,
        }
    }
}

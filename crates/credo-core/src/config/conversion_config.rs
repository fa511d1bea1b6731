use serde::{Deserialize, Serialize};

use super::defaults;

/// XP-to-minutes conversion base.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// XP required per minute of screen time before multipliers.
    pub xp_per_minute: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            xp_per_minute: defaults::DEFAULT_XP_PER_MINUTE,
        }
    }
}

//! Configuration for the credibility engine.
//! TOML-based; every numeric policy knob lives here rather than at call sites.

pub mod conversion_config;
pub mod defaults;
pub mod policy_config;
pub mod redemption_config;

pub use conversion_config::ConversionConfig;
pub use policy_config::PolicyConfig;
pub use redemption_config::RedemptionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::tier::TierTable;

/// Top-level configuration aggregating all sub-configs.
///
/// The engine is embedded in a host app, so config arrives as TOML from the
/// host; unknown keys are ignored (forward-compatible).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredoConfig {
    pub policy: PolicyConfig,
    pub tiers: TierTable,
    pub redemption: RedemptionConfig,
    pub conversion: ConversionConfig,
}

impl CredoConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CredoConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Tier-table coverage is enforced at construction by `TierTable`; this
    /// checks the cross-field rules the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.approval_points < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.approval_points".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.policy.rejection_penalty < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.rejection_penalty".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.policy.streak_interval < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.streak_interval".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.policy.streak_bonus_points < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.streak_bonus_points".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.policy.starting_score > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.starting_score".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        if self.redemption.at_risk_threshold > 100 || self.redemption.unlock_threshold > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "redemption".to_string(),
                message: "thresholds must be between 0 and 100".to_string(),
            });
        }
        if self.redemption.unlock_threshold <= self.redemption.at_risk_threshold {
            return Err(ConfigError::ValidationFailed {
                field: "redemption.unlock_threshold".to_string(),
                message: "must be above the at-risk threshold".to_string(),
            });
        }
        if self.redemption.bonus_multiplier <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "redemption.bonus_multiplier".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.redemption.bonus_duration_days < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "redemption.bonus_duration_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.conversion.xp_per_minute < 1 {
            return Err(ConfigError::ValidationFailed {
                field: "conversion.xp_per_minute".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

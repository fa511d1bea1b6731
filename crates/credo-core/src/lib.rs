//! # credo-core
//!
//! Foundation crate for the Credo credibility engine.
//! Defines the profile model, tier table, events, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod profile;
pub mod tier;

// Re-export the most commonly used types at the crate root.
pub use config::CredoConfig;
pub use errors::{ConfigError, ReviewError};
pub use events::CredibilityEvent;
pub use models::{ApprovalOutcome, RejectionOutcome, UndoOutcome};
pub use profile::{
    CredibilityProfile, RedemptionBonus, ReviewLedger, ReviewOutcome, ReviewRecord, Score,
};
pub use tier::{Tier, TierTable};

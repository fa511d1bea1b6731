//! CredibilityManager — concurrent per-user engine access via DashMap.

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;

use credo_core::config::CredoConfig;
use credo_core::profile::CredibilityProfile;

use crate::engine::CredibilityEngine;

/// Thread-safe map of user id to credibility engine.
///
/// Each engine is a single-writer state machine for its own profile; the
/// manager only hands out handles and owns the process-boundary persistence
/// surface (JSON export/import of all profiles).
pub struct CredibilityManager {
    config: Arc<CredoConfig>,
    engines: DashMap<String, Arc<CredibilityEngine>>,
}

impl CredibilityManager {
    /// Create a manager over the given config.
    pub fn new(config: CredoConfig) -> Self {
        Self {
            config: Arc::new(config),
            engines: DashMap::new(),
        }
    }

    /// The shared config.
    pub fn config(&self) -> &CredoConfig {
        &self.config
    }

    /// Get the engine for a user, creating a fresh profile on first access.
    pub fn engine(&self, user_id: &str) -> Arc<CredibilityEngine> {
        self.engines
            .entry(user_id.to_string())
            .or_insert_with(|| {
                Arc::new(CredibilityEngine::new(user_id, Arc::clone(&self.config)))
            })
            .clone()
    }

    /// Get the engine for a user without creating one.
    pub fn existing_engine(&self, user_id: &str) -> Option<Arc<CredibilityEngine>> {
        self.engines.get(user_id).map(|r| r.clone())
    }

    /// Remove a user's engine. Profiles live for the lifetime of the account;
    /// this is the account-deletion path.
    pub fn remove(&self, user_id: &str) -> Option<Arc<CredibilityEngine>> {
        self.engines.remove(user_id).map(|(_, engine)| engine)
    }

    /// Number of managed profiles.
    pub fn profile_count(&self) -> usize {
        self.engines.len()
    }

    /// All managed user ids.
    pub fn user_ids(&self) -> Vec<String> {
        self.engines.iter().map(|r| r.key().clone()).collect()
    }

    // ---- Process-boundary persistence ----

    /// Export all profiles as JSON, keyed by user id, in stable order.
    pub fn export_profiles(&self) -> Result<String, serde_json::Error> {
        let snapshots: BTreeMap<String, CredibilityProfile> = self
            .engines
            .iter()
            .map(|r| (r.key().clone(), r.value().snapshot()))
            .collect();
        serde_json::to_string_pretty(&snapshots)
    }

    /// Import profiles from a JSON export, replacing any engines already
    /// present for the same user ids.
    pub fn import_profiles(&self, json: &str) -> Result<usize, serde_json::Error> {
        let snapshots: BTreeMap<String, CredibilityProfile> = serde_json::from_str(json)?;
        let count = snapshots.len();
        for (user_id, profile) in snapshots {
            let engine = Arc::new(CredibilityEngine::with_profile(
                user_id.clone(),
                Arc::clone(&self.config),
                profile,
            ));
            self.engines.insert(user_id, engine);
        }
        Ok(count)
    }
}

impl Default for CredibilityManager {
    fn default() -> Self {
        Self::new(CredoConfig::default())
    }
}

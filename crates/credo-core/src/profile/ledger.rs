use std::collections::HashMap;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::record::{ReviewKey, ReviewRecord};

/// Append-mostly store of review decisions, one per (task, reviewer) pair.
///
/// Serialized as a flat list of records — records carry their own key fields,
/// so the map shape is an in-memory detail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewLedger {
    records: HashMap<ReviewKey, ReviewRecord>,
}

impl ReviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record exists for the pair.
    pub fn contains(&self, key: &ReviewKey) -> bool {
        self.records.contains_key(key)
    }

    /// Look up a record by pair.
    pub fn get(&self, key: &ReviewKey) -> Option<&ReviewRecord> {
        self.records.get(key)
    }

    /// Insert a record. Returns false (and leaves the ledger untouched) if the
    /// pair already has a record — uniqueness is enforced here, not just at
    /// the engine boundary.
    pub fn insert(&mut self, record: ReviewRecord) -> bool {
        let key = record.key();
        if self.records.contains_key(&key) {
            return false;
        }
        self.records.insert(key, record);
        true
    }

    /// Mark a record reversed. The caller is responsible for having checked
    /// `reversible()` first; this only flips the flag.
    pub fn mark_reversed(&mut self, key: &ReviewKey) {
        if let Some(record) = self.records.get_mut(key) {
            record.reversed = true;
        }
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &ReviewRecord> {
        self.records.values()
    }
}

impl Serialize for ReviewLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut records: Vec<&ReviewRecord> = self.records.values().collect();
        // Stable output order for snapshots and diffs.
        records.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.task_id.cmp(&b.task_id))
                .then_with(|| a.reviewer_id.cmp(&b.reviewer_id))
        });
        records.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ReviewLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<ReviewRecord>::deserialize(deserializer)?;
        let mut ledger = ReviewLedger::new();
        for record in records {
            if !ledger.insert(record) {
                return Err(D::Error::custom("duplicate (task, reviewer) pair in ledger"));
            }
        }
        Ok(ledger)
    }
}

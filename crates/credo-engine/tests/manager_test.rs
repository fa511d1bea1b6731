use chrono::Utc;

use credo_core::config::CredoConfig;
use credo_engine::CredibilityManager;

// ── Engine lifecycle ─────────────────────────────────────────────────────

#[test]
fn engine_is_created_on_first_access() {
    let manager = CredibilityManager::default();
    assert_eq!(manager.profile_count(), 0);
    assert!(manager.existing_engine("child-1").is_none());

    let engine = manager.engine("child-1");
    assert_eq!(engine.score().value(), 100, "fresh profile at starting score");
    assert_eq!(manager.profile_count(), 1);
}

#[test]
fn same_user_gets_the_same_engine() {
    let manager = CredibilityManager::default();
    let a = manager.engine("child-1");
    a.process_rejection("task-1", "parent", None, Utc::now())
        .expect("rejection");

    let b = manager.engine("child-1");
    assert_eq!(b.score().value(), 90, "handles share one profile");
}

#[test]
fn remove_is_the_account_deletion_path() {
    let manager = CredibilityManager::default();
    manager.engine("child-1");
    manager.engine("child-2");
    assert_eq!(manager.profile_count(), 2);

    assert!(manager.remove("child-1").is_some());
    assert_eq!(manager.profile_count(), 1);
    assert!(manager.existing_engine("child-1").is_none());

    let mut ids = manager.user_ids();
    ids.sort();
    assert_eq!(ids, ["child-2"]);
}

#[test]
fn custom_starting_score_applies_to_new_profiles() {
    let mut config = CredoConfig::default();
    config.policy.starting_score = 70;
    let manager = CredibilityManager::new(config);

    assert_eq!(manager.engine("child-1").score().value(), 70);
}

// ── Process-boundary persistence ─────────────────────────────────────────

#[test]
fn profiles_roundtrip_through_json_export() {
    let manager = CredibilityManager::default();
    let now = Utc::now();

    let child_1 = manager.engine("child-1");
    child_1
        .process_approval("task-1", "parent", Some("done".to_string()), now)
        .expect("approval");
    child_1
        .process_rejection("task-2", "parent", None, now)
        .expect("rejection");

    let child_2 = manager.engine("child-2");
    for i in 0..5 {
        child_2
            .process_rejection(&format!("task-{}", i), "parent", None, now)
            .expect("rejection");
    }

    let json = manager.export_profiles().expect("export");

    let restored = CredibilityManager::default();
    let count = restored.import_profiles(&json).expect("import");
    assert_eq!(count, 2);

    let a = restored.engine("child-1");
    assert_eq!(a.snapshot(), child_1.snapshot());

    let b = restored.engine("child-2");
    assert_eq!(b.score().value(), 50);
    assert!(b.snapshot().had_low_score_since_last_bonus);
}

#[test]
fn restored_profiles_keep_enforcing_ledger_uniqueness() {
    let manager = CredibilityManager::default();
    manager
        .engine("child-1")
        .process_approval("task-1", "parent", None, Utc::now())
        .expect("approval");

    let json = manager.export_profiles().expect("export");
    let restored = CredibilityManager::default();
    restored.import_profiles(&json).expect("import");

    let result = restored
        .engine("child-1")
        .process_approval("task-1", "parent", None, Utc::now());
    assert!(result.is_err(), "duplicate check survives persistence");
}

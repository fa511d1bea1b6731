use std::sync::Arc;

use chrono::Utc;

use credo_core::config::CredoConfig;
use credo_core::errors::ReviewError;
use credo_engine::CredibilityEngine;

fn engine_starting_at(score: u8) -> CredibilityEngine {
    let mut config = CredoConfig::default();
    config.policy.starting_score = score;
    CredibilityEngine::new("child-1", Arc::new(config))
}

// ── Exact reversal ───────────────────────────────────────────────────────

#[test]
fn undo_restores_score_and_streak_exactly() {
    let engine = engine_starting_at(70);
    let now = Utc::now();
    for i in 0..4 {
        engine
            .process_approval(&format!("task-{}", i), "parent", None, now)
            .expect("approval");
    }
    let before = engine.snapshot();
    assert_eq!(before.score.value(), 90);
    assert_eq!(before.consecutive_approvals, 4);

    engine
        .process_rejection("task-r", "parent", None, now)
        .expect("rejection");
    assert_eq!(engine.snapshot().score.value(), 80);
    assert_eq!(engine.snapshot().consecutive_approvals, 0);

    let outcome = engine.undo_rejection("task-r", "parent").expect("undo");
    assert_eq!(outcome.new_score, before.score);
    assert_eq!(outcome.restored_streak, 4);

    let after = engine.snapshot();
    assert_eq!(after.score, before.score, "score restored bit-for-bit");
    assert_eq!(after.consecutive_approvals, before.consecutive_approvals);
}

#[test]
fn undo_of_a_floor_clamped_rejection_is_still_exact() {
    // Penalty 10 from score 4 only removes 4 points; the undo must add back
    // exactly those 4, not the nominal 10.
    let engine = engine_starting_at(4);
    let now = Utc::now();
    engine
        .process_rejection("task-r", "parent", None, now)
        .expect("rejection");
    assert_eq!(engine.snapshot().score.value(), 0);

    let outcome = engine.undo_rejection("task-r", "parent").expect("undo");
    assert_eq!(outcome.new_score.value(), 4);
}

#[test]
fn undone_record_stays_in_the_ledger_as_reversed() {
    let engine = engine_starting_at(50);
    engine
        .process_rejection("task-r", "parent", None, Utc::now())
        .expect("rejection");
    engine.undo_rejection("task-r", "parent").expect("undo");

    let profile = engine.snapshot();
    assert_eq!(profile.ledger.len(), 1, "records are never deleted");
    let record = profile.ledger.iter().next().expect("record");
    assert!(record.reversed);
}

// ── Misuse ───────────────────────────────────────────────────────────────

#[test]
fn undo_of_an_unknown_pair_fails() {
    let engine = engine_starting_at(50);
    let result = engine.undo_rejection("never-seen", "parent");
    assert!(matches!(result, Err(ReviewError::NoSuchReview { .. })));
}

#[test]
fn undo_of_an_approval_fails() {
    let engine = engine_starting_at(50);
    engine
        .process_approval("task-1", "parent", None, Utc::now())
        .expect("approval");

    let result = engine.undo_rejection("task-1", "parent");
    assert!(
        matches!(result, Err(ReviewError::NotRejected { .. })),
        "approvals are final settlement"
    );
}

#[test]
fn second_undo_of_the_same_rejection_fails() {
    let engine = engine_starting_at(50);
    let now = Utc::now();
    engine
        .process_rejection("task-r", "parent", None, now)
        .expect("rejection");
    engine.undo_rejection("task-r", "parent").expect("first undo");

    let before = engine.snapshot();
    let result = engine.undo_rejection("task-r", "parent");
    assert!(matches!(result, Err(ReviewError::AlreadyReversed { .. })));
    assert_eq!(engine.snapshot(), before, "failed undo must not mutate");
}

#[test]
fn duplicate_check_outlives_a_reversal() {
    // Reversal marks the record; it does not free the (task, reviewer) key.
    // A re-review of the same submission is a new task id upstream.
    let engine = engine_starting_at(50);
    let now = Utc::now();
    engine
        .process_rejection("task-r", "parent", None, now)
        .expect("rejection");
    engine.undo_rejection("task-r", "parent").expect("undo");

    let result = engine.process_approval("task-r", "parent", None, now);
    assert!(matches!(result, Err(ReviewError::DuplicateReview { .. })));
}

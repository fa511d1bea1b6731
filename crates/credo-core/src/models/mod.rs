//! Result models returned by engine operations. Each carries everything a
//! notification or presentation collaborator needs, so callers never re-derive
//! deltas from profile state.

pub mod approval_outcome;
pub mod rejection_outcome;
pub mod undo_outcome;

pub use approval_outcome::ApprovalOutcome;
pub use rejection_outcome::RejectionOutcome;
pub use undo_outcome::UndoOutcome;

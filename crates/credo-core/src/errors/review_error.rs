/// Validation failures for review operations.
///
/// All variants are synchronous caller errors: the profile is never left in a
/// partially-updated state, so every one of these is safe to surface or retry
/// with corrected arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("review already recorded for task {task_id} by reviewer {reviewer_id}")]
    DuplicateReview { task_id: String, reviewer_id: String },

    #[error("no review recorded for task {task_id} by reviewer {reviewer_id}")]
    NoSuchReview { task_id: String, reviewer_id: String },

    #[error("review for task {task_id} by reviewer {reviewer_id} was already reversed")]
    AlreadyReversed { task_id: String, reviewer_id: String },

    #[error("review for task {task_id} by reviewer {reviewer_id} is an approval and cannot be undone")]
    NotRejected { task_id: String, reviewer_id: String },
}

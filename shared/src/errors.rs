//! Error types for the Workout Tracker application

use thiserror::Error;

/// Input validation failures
///
/// Raised before any storage is touched. The backend maps every variant
/// to a 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} cannot be greater than {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("invalid email format")]
    InvalidEmail,

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: i64 },

    #[error("entry with order_index {order_index}: {violation}")]
    InvalidEntry {
        order_index: i32,
        violation: EntryViolation,
    },
}

/// Reasons a single workout entry is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryViolation {
    #[error("must specify either reps or duration_seconds, not both")]
    BothRepsAndDuration,

    #[error("must specify either reps or duration_seconds")]
    NeitherRepsNorDuration,

    #[error("order_index must be a positive integer")]
    NonPositiveOrderIndex,

    #[error("order_index is used by more than one entry")]
    DuplicateOrderIndex,

    #[error("exercise_name is required")]
    MissingExerciseName,

    #[error("exercise_name cannot be greater than 255 characters")]
    ExerciseNameTooLong,

    #[error("sets must be at least 1")]
    NonPositiveSets,

    #[error("reps must be at least 1")]
    NonPositiveReps,

    #[error("duration_seconds must be at least 1")]
    NonPositiveDuration,

    #[error("weight must be between 0 and 9999.99")]
    WeightOutOfRange,
}

/// Authentication error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid authorization header")]
    MalformedHeader,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("you must be logged in to access this resource")]
    AuthenticationRequired,

    #[error("invalid login attempt")]
    InvalidCredentials,
}

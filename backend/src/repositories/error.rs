//! Storage-layer outcomes
//!
//! Repositories report typed failures and leave HTTP status decisions to
//! the service and route layers. Missing rows are `Option::None` or a
//! `false` return, not errors.

use thiserror::Error;
use workout_tracker_shared::ValidationError;

/// Errors produced by repository calls
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique constraint rejected the write; carries the field name
    #[error("duplicate {0}")]
    Duplicate(&'static str),

    /// Input rejected before any row was written
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Result type alias for repository calls
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Map a unique-constraint violation on `constraint` to `Duplicate(field)`
    ///
    /// Any other error passes through as `Database`.
    pub fn from_unique_violation(err: sqlx::Error, constraints: &[(&str, &'static str)]) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let field = db_err
                    .constraint()
                    .and_then(|name| {
                        constraints
                            .iter()
                            .find(|(constraint, _)| *constraint == name)
                            .map(|(_, field)| *field)
                    })
                    .unwrap_or("identity");
                return StoreError::Duplicate(field);
            }
        }
        StoreError::Database(err)
    }
}

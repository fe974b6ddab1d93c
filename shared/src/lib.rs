//! Workout Tracker Shared Library
//!
//! This crate contains the domain models, API request/response types and
//! input validation shared by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{User, Workout, WorkoutEntry, ANONYMOUS_USER_ID};
pub use types::*;

//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod error;
pub mod token;
pub mod user;
pub mod workout;

pub use error::{StoreError, StoreResult};
pub use token::TokenRepository;
pub use user::{CreateUser, UserRecord, UserRepository};
pub use workout::{
    NewWorkout, WorkoutEntryRecord, WorkoutRecord, WorkoutRepository, WorkoutUpdate,
};

//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and external systems.

pub mod token;
pub mod user;
pub mod workout;

pub use token::TokenService;
pub use user::UserService;
pub use workout::{apply_update, WorkoutService};

//! Authentication module
//!
//! Opaque database-backed bearer tokens with bcrypt password hashing,
//! plus the per-request identity pipeline.

mod identity;
mod middleware;
mod password;
mod token;

pub use identity::{
    check_owner, parse_id, require_authenticated, AuthUser, CurrentUser, WorkoutOwner,
    ANONYMOUS_USER,
};
pub use middleware::{authenticate, parse_bearer};
pub use password::PasswordService;
pub use token::{hash_token, Token, SCOPE_AUTH, TOKEN_BYTES};

//! Request identity extractors
//!
//! The `authenticate` middleware resolves who is calling and stores a
//! [`CurrentUser`] in the request extensions. Handlers then state what
//! they need by picking an extractor:
//!
//! - [`CurrentUser`]: any caller, possibly anonymous
//! - [`AuthUser`]: rejects anonymous callers with 401
//! - [`WorkoutOwner`]: 401 for anonymous, 404 for a missing workout,
//!   403 when the caller does not own it

use crate::error::ApiError;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
};
use once_cell::sync::Lazy;
use tracing::warn;
use workout_tracker_shared::{AuthError, User};

/// Process-wide identity for unauthenticated callers
pub static ANONYMOUS_USER: Lazy<User> = Lazy::new(User::anonymous);

/// Identity resolved by the authentication middleware
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_USER.clone())
    }

    fn from_extensions(parts: &Parts) -> Self {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            // Router was built without the authenticate layer
            .expect("authenticate middleware must run before identity extraction")
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_extensions(parts))
    }
}

/// Authenticated (non-anonymous) caller
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    #[inline]
    pub fn id(&self) -> i64 {
        self.0.id
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require_authenticated(CurrentUser::from_extensions(parts).0)
    }
}

/// Reject the anonymous identity
pub fn require_authenticated(user: User) -> Result<AuthUser, ApiError> {
    if user.is_anonymous() {
        return Err(AuthError::AuthenticationRequired.into());
    }
    Ok(AuthUser(user))
}

/// Caller proven to own the workout named in the path
#[derive(Debug, Clone)]
pub struct WorkoutOwner {
    pub user: User,
    pub workout_id: i64,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for WorkoutOwner
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation("invalid workout id".to_string()))?;
        let workout_id = parse_id(&raw_id)?;

        let app_state = AppState::from_ref(state);
        let owner_id = WorkoutService::owner_id(app_state.db(), workout_id).await?;
        check_owner(&user, owner_id, workout_id)?;

        Ok(WorkoutOwner { user, workout_id })
    }
}

/// Compare the caller against the stored owner
pub fn check_owner(user: &User, owner_id: i64, workout_id: i64) -> Result<(), ApiError> {
    if user.id != owner_id {
        warn!(user_id = user.id, workout_id, "ownership check failed");
        return Err(ApiError::Forbidden(
            "you do not have permission to modify this workout".to_string(),
        ));
    }
    Ok(())
}

/// Parse a positive resource id from a path segment
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation("invalid workout id".to_string())),
    }
}

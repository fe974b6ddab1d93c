//! User routes
//!
//! Registration and the caller's own profile.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use workout_tracker_shared::{RegisterUserRequest, UserEnvelope};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /users
async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserEnvelope>)> {
    let Json(req) = body?;
    let user = UserService::register(state.db(), req, state.config().auth.bcrypt_cost).await?;
    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}

/// Profile of the authenticated caller
///
/// GET /users/me
async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    // Re-read so a profile edited since token issue is current
    let user = UserService::get_by_id(state.db(), auth.id())
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;
    Ok(Json(UserEnvelope { user }))
}

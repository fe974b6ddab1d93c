//! Token routes
//!
//! Login issues a bearer token; logout revokes all of the caller's
//! authentication tokens.

use crate::auth::{AuthUser, SCOPE_AUTH};
use crate::error::ApiResult;
use crate::services::{TokenService, UserService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use secrecy::ExposeSecret;
use workout_tracker_shared::{AuthTokenEnvelope, AuthTokenResponse, CreateTokenRequest};

/// Create token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/auth", post(create_auth_token).delete(revoke_auth_tokens))
}

/// Log in with username and password
///
/// POST /tokens/auth
async fn create_auth_token(
    State(state): State<AppState>,
    body: Result<Json<CreateTokenRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthTokenEnvelope>)> {
    let Json(req) = body?;
    let token =
        UserService::create_auth_token(state.db(), req, state.config().token_ttl(), SCOPE_AUTH)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthTokenEnvelope {
            auth_token: AuthTokenResponse {
                token: token.plaintext.expose_secret().clone(),
                expiry: token.expiry,
            },
        }),
    ))
}

/// Log out everywhere
///
/// DELETE /tokens/auth
async fn revoke_auth_tokens(State(state): State<AppState>, auth: AuthUser) -> ApiResult<StatusCode> {
    TokenService::revoke_all(state.db(), auth.id(), SCOPE_AUTH).await?;
    Ok(StatusCode::NO_CONTENT)
}

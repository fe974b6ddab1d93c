//! Authentication middleware
//!
//! Runs on every request. Resolves the caller from the `Authorization`
//! header and inserts a [`CurrentUser`] into the request extensions.
//! A missing header yields the anonymous identity; a malformed header or
//! an unknown/expired token ends the request with 401.

use super::identity::CurrentUser;
use super::token::SCOPE_AUTH;
use crate::error::ApiError;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{
        header::{AUTHORIZATION, VARY},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use workout_tracker_shared::AuthError;

/// Identify the caller and advertise `Vary: Authorization`
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let mut response = match resolve_identity(&state, request.headers()).await {
        Ok(current) => {
            request.extensions_mut().insert(current);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    };

    // Same URL, different payload per credential
    response
        .headers_mut()
        .append(VARY, HeaderValue::from_static("Authorization"));
    response
}

async fn resolve_identity(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(CurrentUser::anonymous());
    };

    let header = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = parse_bearer(header)?;

    match UserService::get_by_token(state.db(), SCOPE_AUTH, token).await {
        Ok(Some(user)) => {
            debug!(user_id = user.id, "request authenticated");
            Ok(CurrentUser(user))
        }
        Ok(None) => Err(AuthError::InvalidToken.into()),
        Err(err) => {
            // Storage failures are reported as a bad credential, never leaked
            warn!("token lookup failed: {:?}", err);
            Err(AuthError::InvalidToken.into())
        }
    }
}

/// Split `Bearer <token>` into its token part
///
/// The header must be exactly two space-separated parts with the
/// `Bearer` scheme.
pub fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

//! User service for registration, login and identity lookups
//!
//! bcrypt hashing and verification run on the blocking thread pool.

use crate::auth::{PasswordService, Token};
use crate::error::ApiError;
use crate::repositories::{CreateUser, TokenRepository, UserRepository};
use chrono::{Duration, Utc};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;
use workout_tracker_shared::validation::{validate_email, validate_password, validate_username};
use workout_tracker_shared::{AuthError, CreateTokenRequest, RegisterUserRequest, User};

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Duplicate username or email surfaces as 409 from the unique
    /// constraint; no pre-check query is issued.
    pub async fn register(
        pool: &PgPool,
        request: RegisterUserRequest,
        bcrypt_cost: u32,
    ) -> Result<User, ApiError> {
        validate_registration(&request)?;

        let password_hash = PasswordService::hash_async(request.password, bcrypt_cost)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            CreateUser {
                username: request.username,
                email: request.email,
                password_hash,
                bio: request.bio,
            },
        )
        .await?;

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Exchange username and password for a fresh authentication token
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    pub async fn create_auth_token(
        pool: &PgPool,
        request: CreateTokenRequest,
        ttl: Duration,
        scope: &str,
    ) -> Result<Token, ApiError> {
        if request.username.is_empty() {
            return Err(ApiError::Validation("username is required".to_string()));
        }
        if request.password.expose_secret().is_empty() {
            return Err(ApiError::Validation("password is required".to_string()));
        }

        let user = UserRepository::find_by_username(pool, &request.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = PasswordService::matches_async(user.password_hash.clone(), request.password)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = TokenRepository::create(pool, user.id, ttl, scope)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = user.id, "auth token issued");
        Ok(token)
    }

    /// Get user by username
    pub async fn get_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, ApiError> {
        Ok(UserRepository::find_by_username(pool, username).await?)
    }

    /// Get user by id
    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, ApiError> {
        Ok(UserRepository::find_by_id(pool, id).await?)
    }

    /// Resolve the owner of an unexpired token in `scope`
    pub async fn get_by_token(
        pool: &PgPool,
        scope: &str,
        plaintext: &str,
    ) -> Result<Option<User>, ApiError> {
        Ok(TokenRepository::lookup_user(pool, scope, plaintext, Utc::now()).await?)
    }
}

fn validate_registration(request: &RegisterUserRequest) -> Result<(), ApiError> {
    validate_username(&request.username)?;
    validate_email(&request.email)?;
    validate_password(request.password.expose_secret())?;
    Ok(())
}

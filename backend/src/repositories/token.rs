//! Token repository
//!
//! Stores only the SHA-256 hash of each token. Lookups hash the
//! presented plaintext and never return rows past their expiry.

use super::error::StoreResult;
use super::user::UserRecord;
use crate::auth::{hash_token, Token};
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use workout_tracker_shared::User;

/// Token repository for database operations
pub struct TokenRepository;

impl TokenRepository {
    /// Generate and persist a token for `user_id`
    ///
    /// On error nothing should be assumed about the row; the caller
    /// never receives the plaintext.
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        ttl: Duration,
        scope: &str,
    ) -> anyhow::Result<Token> {
        let token = Token::generate(user_id, ttl, scope)?;

        sqlx::query(
            r#"
            INSERT INTO tokens (hash, user_id, expiry, scope)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&token.hash)
        .bind(token.user_id)
        .bind(token.expiry)
        .bind(&token.scope)
        .execute(pool)
        .await?;

        Ok(token)
    }

    /// Resolve the owner of a live token in `scope`
    ///
    /// Expired rows are treated as absent but left in place for the reaper.
    pub async fn lookup_user(
        pool: &PgPool,
        scope: &str,
        plaintext: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<User>> {
        let hash = hash_token(plaintext);

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.bio, u.created_at, u.updated_at
            FROM users u
            INNER JOIN tokens t ON t.user_id = u.id
            WHERE t.hash = $1 AND t.scope = $2 AND t.expiry > $3
            "#,
        )
        .bind(&hash)
        .bind(scope)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(User::from))
    }

    /// Revoke every token of `user_id` in `scope`
    ///
    /// Idempotent: deleting zero rows is not an error.
    pub async fn delete_for_user(pool: &PgPool, user_id: i64, scope: &str) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM tokens WHERE scope = $1 AND user_id = $2"#)
            .bind(scope)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Purge tokens whose expiry is at or before `now`
    pub async fn delete_expired(pool: &PgPool, now: DateTime<Utc>) -> StoreResult<u64> {
        let result = sqlx::query(r#"DELETE FROM tokens WHERE expiry <= $1"#)
            .bind(now)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

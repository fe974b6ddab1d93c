//! User repository for database operations

use super::error::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use workout_tracker_shared::User;

/// Unique constraints on `users` and the field each one guards
const USER_UNIQUE_CONSTRAINTS: &[(&str, &str)] = &[
    ("users_username_key", "username"),
    ("users_email_key", "email"),
];

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username,
            email: record.email,
            password_hash: record.password_hash,
            bio: record.bio,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    ///
    /// Uniqueness is enforced by the schema; a violation comes back as
    /// `StoreError::Duplicate("username")` or `("email")`.
    pub async fn create(pool: &PgPool, input: CreateUser) -> StoreResult<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, email, password_hash, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, bio, created_at, updated_at
            "#,
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.bio)
        .fetch_one(pool)
        .await
        .map_err(|e| StoreError::from_unique_violation(e, USER_UNIQUE_CONSTRAINTS))?;

        Ok(record.into())
    }

    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> StoreResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, bio, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(User::from))
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> StoreResult<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, bio, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record.map(User::from))
    }
}

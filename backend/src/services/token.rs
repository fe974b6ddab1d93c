//! Token lifecycle service
//!
//! Revocation on logout and periodic removal of expired rows.

use crate::error::ApiError;
use crate::repositories::TokenRepository;
use chrono::Utc;
use sqlx::PgPool;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Token service
pub struct TokenService;

impl TokenService {
    /// Revoke every token of `user_id` in `scope`
    pub async fn revoke_all(pool: &PgPool, user_id: i64, scope: &str) -> Result<u64, ApiError> {
        let removed = TokenRepository::delete_for_user(pool, user_id, scope).await?;
        info!(user_id, removed, scope, "tokens revoked");
        Ok(removed)
    }

    /// Periodically delete tokens whose expiry has passed
    ///
    /// Lookups already ignore expired rows; this only keeps the table small.
    pub fn spawn_expiry_reaper(pool: PgPool, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match TokenRepository::delete_expired(&pool, Utc::now()).await {
                    Ok(0) => debug!("no expired tokens"),
                    Ok(removed) => info!(removed, "expired tokens deleted"),
                    Err(e) => warn!("expired token cleanup failed: {:?}", e),
                }
            }
        })
    }
}

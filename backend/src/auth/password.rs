//! Password hashing using bcrypt
//!
//! Provides salted password hashing and verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Async callers should use the
//! `*_async` variants, which run on the blocking thread pool.

use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a fresh salt (blocking operation)
    pub fn hash(password: &str, cost: u32) -> Result<String> {
        if password.is_empty() {
            bail!("cannot hash an empty password");
        }
        bcrypt::hash(password, cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: SecretString, cost: u32) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(password.expose_secret(), cost))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Check a candidate password against a stored hash (blocking operation)
    ///
    /// A mismatch is `Ok(false)`. `Err` means the stored hash itself is
    /// unusable and must be treated as an internal error, never as a
    /// failed login.
    pub fn matches(hash: &str, candidate: &str) -> Result<bool> {
        bcrypt::verify(candidate, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Check a candidate password asynchronously (non-blocking)
    pub async fn matches_async(hash: String, candidate: SecretString) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::matches(&hash, candidate.expose_secret()))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_matches() {
        let password = "secret123";
        let hash = PasswordService::hash(password, TEST_COST).unwrap();

        assert_ne!(hash, password);
        assert!(PasswordService::matches(&hash, password).unwrap());
        assert!(!PasswordService::matches(&hash, "wrong_password").unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash(password, TEST_COST).unwrap();
        let hash2 = PasswordService::hash(password, TEST_COST).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(PasswordService::matches(&hash1, password).unwrap());
        assert!(PasswordService::matches(&hash2, password).unwrap());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(PasswordService::hash("", TEST_COST).is_err());
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        let result = PasswordService::matches("not-a-bcrypt-hash", "secret123");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_matches() {
        let hash = PasswordService::hash_async(SecretString::new("async_secret".to_string()), TEST_COST)
            .await
            .unwrap();

        assert!(PasswordService::matches_async(hash.clone(), SecretString::new("async_secret".to_string()))
            .await
            .unwrap());
        assert!(!PasswordService::matches_async(hash, SecretString::new("wrong".to_string()))
            .await
            .unwrap());
    }
}

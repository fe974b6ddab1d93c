//! Opaque bearer token generation
//!
//! A token is 32 random bytes handed to the client hex-encoded. Only the
//! SHA-256 digest of that string is ever stored or queried.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use secrecy::SecretString;
use sha2::{Digest, Sha256};

/// Scope tag for login tokens
pub const SCOPE_AUTH: &str = "authentication";

/// Random bytes per token before hex encoding (32 bytes = 64 hex chars)
pub const TOKEN_BYTES: usize = 32;

/// A freshly generated bearer credential
///
/// `plaintext` is redacted in `Debug` output and must only be exposed
/// when building the response that hands it to the client.
#[derive(Debug)]
pub struct Token {
    pub plaintext: SecretString,
    pub hash: Vec<u8>,
    pub user_id: i64,
    pub expiry: DateTime<Utc>,
    pub scope: String,
}

impl Token {
    /// Generate a token for `user_id` that expires `ttl` from now
    ///
    /// Fails only if the OS entropy source does.
    pub fn generate(user_id: i64, ttl: Duration, scope: &str) -> Result<Self> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .context("entropy source unavailable")?;

        let plaintext = hex::encode(bytes);
        let hash = hash_token(&plaintext);

        Ok(Self {
            plaintext: SecretString::new(plaintext),
            hash,
            user_id,
            expiry: Utc::now() + ttl,
            scope: scope.to_string(),
        })
    }
}

/// Deterministic lookup hash of a presented token
pub fn hash_token(plaintext: &str) -> Vec<u8> {
    Sha256::digest(plaintext.as_bytes()).to_vec()
}

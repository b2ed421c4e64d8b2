use std::sync::OnceLock;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Well-formed Argon2id hash with default parameters that matches no password.
/// Used as the decoy when hashing the decoy password fails.
const FALLBACK_DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c3NvLWRlY295LXNhbHQhIQ$e1p273SbithARjep+Ma+DVO0+05z8MBhs2IMjhVo2FM";

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and token encoding with a fixed token time-to-live.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
    decoy_hash: OnceLock<String>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Instant after which the token no longer validates
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret),
            token_ttl,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Lifetime of issued tokens.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier placed in the token's `sub` claim
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_subject(subject, self.token_ttl)?;
        let access_token = self.token_codec.encode(&claims)?;
        let expires_at = claims.expires_at().unwrap_or_else(Utc::now);

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Reject an authentication attempt for an account that does not exist.
    ///
    /// Spends the same verification work as a real attempt so that unknown
    /// accounts cannot be told apart from wrong passwords by response time.
    ///
    /// # Returns
    /// Always `InvalidCredentials`
    pub fn reject(&self, password: &str) -> AuthenticationError {
        let decoy_hash = self.decoy_hash.get_or_init(|| {
            self.password_hasher
                .hash(DECOY_PASSWORD)
                .unwrap_or_else(|_| FALLBACK_DECOY_HASH.to_string())
        });
        let _ = self.password_hasher.verify(password, decoy_hash);

        AuthenticationError::InvalidCredentials
    }
}

//! Authentication utilities library
//!
//! Provides the credential primitives of the SSO service:
//! - Password hashing (Argon2id)
//! - Access token encoding and verification (HS256, algorithm pinned)
//! - Authentication coordination
//!
//! Services define their own authentication traits and adapt these implementations.
//! A verifier only needs [`TokenCodec`] and the shared secret, so it can run in a
//! different process from the issuer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, TokenCodec, TokenError};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("user123", Duration::minutes(5)).unwrap();
//! let token = codec.encode(&claims).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//!
//! let other = TokenCodec::new(b"another_key_at_least_32_bytes_long");
//! assert_eq!(other.decode(&token), Err(TokenError::SignatureMismatch));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenCodec};
//! use chrono::Duration;
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let auth = Authenticator::new(secret, Duration::minutes(5));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Validate token (typically in another process)
//! let claims = TokenCodec::new(secret).decode(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;

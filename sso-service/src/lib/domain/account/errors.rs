use auth::AuthenticationError;
use thiserror::Error;

/// Error for request fields that violate a precondition
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Error reported by user directory implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User not found")]
    NotFound,

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for registration and login.
///
/// Messages are safe to return to callers. `Internal` keeps the underlying
/// failure as its source only.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("User with email {0} already exists")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AuthError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AuthError::Internal(anyhow::Error::new(err))
    }
}

impl From<AuthenticationError> for AuthError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            AuthenticationError::Token(e) => AuthError::internal(e),
        }
    }
}

use thiserror::Error;

/// Error for token validation.
///
/// Tamper classes (bad signature, foreign algorithm, broken structure) are
/// deliberately collapsed into `InvalidToken`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

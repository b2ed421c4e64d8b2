use thiserror::Error;

/// Error type for token operations.
///
/// Decoding failures are classified precisely so that callers can decide how
/// much of the classification to expose.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature does not match")]
    SignatureMismatch,

    #[error("Token declares an unexpected signing algorithm")]
    AlgorithmMismatch,

    #[error("Token is expired")]
    Expired,
}

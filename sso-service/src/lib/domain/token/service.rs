use auth::TokenCodec;
use auth::TokenError;
use chrono::DateTime;
use chrono::Utc;

use crate::token::errors::ValidationError;
use crate::token::ports::TokenValidatorPort;

/// Verifies bearer tokens with nothing but the shared signing secret.
///
/// Shares no state with the issuing side, so it can be deployed in a
/// separate process.
pub struct TokenValidator {
    codec: TokenCodec,
}

impl TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            codec: TokenCodec::new(secret),
        }
    }

    /// Validate a token at an explicit verification time.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<bool, ValidationError> {
        if token.is_empty() {
            return Err(ValidationError::InvalidToken);
        }

        match self.codec.decode_at(token, now) {
            Ok(_) => Ok(true),
            Err(TokenError::Expired) => Err(ValidationError::TokenExpired),
            Err(_) => Err(ValidationError::InvalidToken),
        }
    }
}

impl TokenValidatorPort for TokenValidator {
    fn validate(&self, token: &str) -> Result<bool, ValidationError> {
        self.validate_at(token, Utc::now())
    }
}

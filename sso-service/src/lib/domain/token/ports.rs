use crate::token::errors::ValidationError;

/// Port for stateless token verification.
pub trait TokenValidatorPort: Send + Sync + 'static {
    /// Validate a bearer token against the current time.
    ///
    /// # Arguments
    /// * `token` - Token string presented by a caller
    ///
    /// # Returns
    /// `true` when the token is authentic and unexpired
    ///
    /// # Errors
    /// * `InvalidToken` - Empty, malformed, forged or foreign-algorithm token
    /// * `TokenExpired` - Authentic token past its expiry
    fn validate(&self, token: &str) -> Result<bool, ValidationError>;
}

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::TokenError;

/// Claims carried by an access token.
///
/// Only the registered `sub`, `iat` and `exp` claims of RFC 7519 are used.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, issued now and valid for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique user identifier
    /// * `ttl` - Token time-to-live
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry falls outside the representable time range
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Result<Self, TokenError> {
        Self::issued_at(subject, Utc::now(), ttl)
    }

    /// Create claims for a subject with an explicit issuance time.
    pub fn issued_at(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed(format!("token lifetime of {}s overflows", ttl.num_seconds()))
        })?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check whether the claims are expired at `now`.
    ///
    /// A token stays valid while `exp` is strictly in the future.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", Duration::minutes(5)).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 5 * 60);
    }

    #[test]
    fn test_issued_at() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let claims = Claims::issued_at("user123", issued_at, Duration::hours(1)).unwrap();

        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_003_600);
        assert_eq!(claims.expires_at(), DateTime::from_timestamp(1_700_003_600, 0));
    }

    #[test]
    fn test_is_expired_at() {
        let issued_at = DateTime::from_timestamp(1000, 0).unwrap();
        let claims = Claims::issued_at("user123", issued_at, Duration::seconds(10)).unwrap();

        assert!(!claims.is_expired_at(DateTime::from_timestamp(1009, 0).unwrap()));
        assert!(claims.is_expired_at(DateTime::from_timestamp(1010, 0).unwrap())); // Exactly at expiration
        assert!(claims.is_expired_at(DateTime::from_timestamp(1011, 0).unwrap()));
    }

    #[test]
    fn test_issued_at_overflowing_ttl() {
        let issued_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let result = Claims::issued_at("user123", issued_at, Duration::seconds(10_000_000_000_000));

        assert!(matches!(result, Err(TokenError::EncodingFailed(_))));
    }
}

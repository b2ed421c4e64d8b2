use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

const ALGORITHM: Algorithm = Algorithm::HS256;
const ALGORITHM_NAME: &str = "HS256";

/// Token codec for encoding and verifying access tokens.
///
/// Tokens are compact JWS strings signed with HMAC-SHA-256. The algorithm is
/// pinned: the header's `alg` is only ever compared against HS256 and is never
/// used to pick a key.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    /// Create a new codec with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret (should be stored securely)
    ///
    /// # Returns
    /// TokenCodec instance configured with HS256
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Issuer and verifier must be configured with the same secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Token string `header.payload.signature`
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token against the current time.
    ///
    /// See [`TokenCodec::decode_at`].
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Decode and verify a token at an explicit verification time.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    /// * `now` - Verification time used for the expiry check
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Malformed` - Wrong segment structure, undecodable header or payload
    /// * `AlgorithmMismatch` - Header declares an algorithm other than HS256
    /// * `SignatureMismatch` - MAC over `header.payload` does not match
    /// * `Expired` - `exp` is not in the future relative to `now`
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let header_segment = header_segment(token)?;
        check_algorithm(token, header_segment)?;

        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked below against `now`, without leeway
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                    ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                        TokenError::AlgorithmMismatch
                    }
                    _ => TokenError::Malformed,
                }
            })?;

        if token_data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

fn header_segment(token: &str) -> Result<&str, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
        return Err(TokenError::Malformed);
    }
    Ok(segments[0])
}

fn check_algorithm(token: &str, header_segment: &str) -> Result<(), TokenError> {
    match decode_header(token) {
        Ok(header) if header.alg == ALGORITHM => Ok(()),
        Ok(_) => Err(TokenError::AlgorithmMismatch),
        // jsonwebtoken cannot parse headers naming algorithms it does not
        // know (e.g. "none"), so read `alg` from the raw JSON instead.
        Err(_) => match declared_algorithm(header_segment) {
            Some(alg) if alg != ALGORITHM_NAME => Err(TokenError::AlgorithmMismatch),
            _ => Err(TokenError::Malformed),
        },
    }
}

fn declared_algorithm(header_segment: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(header_segment).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    header.get("alg")?.as_str().map(str::to_owned)
}

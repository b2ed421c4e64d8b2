use tonic::Status;

use crate::proto::ValidateRequest;
use crate::proto::ValidateResponse;
use crate::token::ports::TokenValidatorPort;

pub fn validate<V>(validator: &V, request: ValidateRequest) -> Result<ValidateResponse, Status>
where
    V: TokenValidatorPort,
{
    match validator.validate(&request.token) {
        Ok(is_valid) => Ok(ValidateResponse { is_valid }),
        Err(e) => {
            tracing::debug!(reason = %e, "Token rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::Claims;
    use auth::TokenCodec;
    use chrono::Duration;
    use tonic::Code;

    use super::*;
    use crate::token::service::TokenValidator;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn request(token: String) -> ValidateRequest {
        ValidateRequest { token }
    }

    fn mint(ttl: Duration) -> String {
        TokenCodec::new(SECRET)
            .encode(&Claims::for_subject("user123", ttl).unwrap())
            .unwrap()
    }

    #[test]
    fn test_validate_valid_token() {
        let validator = TokenValidator::new(SECRET);

        let response = validate(&validator, request(mint(Duration::minutes(5)))).unwrap();
        assert!(response.is_valid);
    }

    #[test]
    fn test_validate_empty_token() {
        let validator = TokenValidator::new(SECRET);

        let status = validate(&validator, request(String::new())).unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn test_validate_expired_token() {
        let validator = TokenValidator::new(SECRET);

        let status = validate(&validator, request(mint(Duration::seconds(-5)))).unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
        assert_eq!(status.message(), "token expired");
    }
}

use tonic::Status;

use crate::account::errors::AuthError;
use crate::token::errors::ValidationError;

pub mod login;
pub mod register;
pub mod validate;

impl From<AuthError> for Status {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(_) => Status::invalid_argument(err.to_string()),
            AuthError::AlreadyExists(_) => Status::already_exists(err.to_string()),
            AuthError::InvalidCredentials => Status::invalid_argument("invalid credentials"),
            AuthError::Internal(source) => {
                tracing::error!(error = ?source, "Request failed with internal error");
                Status::internal("internal error")
            }
        }
    }
}

impl From<ValidationError> for Status {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidToken => Status::invalid_argument("invalid token"),
            ValidationError::TokenExpired => Status::unauthenticated("token expired"),
        }
    }
}

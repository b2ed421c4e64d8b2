use std::sync::Arc;

use tonic::Status;

use crate::account::errors::AuthError;
use crate::account::models::LoginCommand;
use crate::account::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login<S>(service: Arc<S>, request: LoginRequest) -> Result<LoginResponse, Status>
where
    S: AuthServicePort,
{
    let command = LoginCommand::new(request.email, request.password).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected login request");
        AuthError::from(e)
    })?;

    let email = command.email.clone();

    match service.login(command).await {
        Ok(token) => {
            tracing::info!(email = %email, "Issued access token");
            Ok(LoginResponse { token })
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(email = %email, "Login rejected");
            Err(AuthError::InvalidCredentials.into())
        }
        Err(e) => Err(e.into()),
    }
}

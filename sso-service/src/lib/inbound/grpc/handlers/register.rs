use std::sync::Arc;

use tonic::Status;

use crate::account::errors::AuthError;
use crate::account::models::RegisterCommand;
use crate::account::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register<S>(service: Arc<S>, request: RegisterRequest) -> Result<RegisterResponse, Status>
where
    S: AuthServicePort,
{
    let command = RegisterCommand::new(
        request.first_name,
        request.last_name,
        request.email,
        request.password,
    )
    .map_err(|e| {
        tracing::debug!(reason = %e, "Rejected register request");
        AuthError::from(e)
    })?;

    let email = command.email.clone();

    match service.register(command).await {
        Ok(user_id) => {
            tracing::info!(user_id = %user_id, "Registered user");
            Ok(RegisterResponse {
                user_id: user_id.to_string(),
            })
        }
        Err(e) => {
            if let AuthError::AlreadyExists(_) = e {
                tracing::info!(email = %email, "Registration for taken email");
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use tonic::Code;

    use super::*;
    use crate::account::models::LoginCommand;
    use crate::account::models::UserId;

    mock! {
        pub TestAuthService {}

        #[async_trait]
        impl AuthServicePort for TestAuthService {
            async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;
            async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;
        }
    }

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_returns_user_id() {
        let mut service = MockTestAuthService::new();
        let user_id = UserId::new();

        service
            .expect_register()
            .withf(|command| command.email.as_str() == "ana@x.com")
            .times(1)
            .returning(move |_| Ok(user_id));

        let response = register(Arc::new(service), request(" Ana@X.com ")).await.unwrap();
        assert_eq!(response.user_id, user_id.to_string());
    }

    #[tokio::test]
    async fn test_register_missing_field_skips_service() {
        let mut service = MockTestAuthService::new();
        service.expect_register().times(0);

        let status = register(Arc::new(service), request("   ")).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("email is required"));
    }

    #[tokio::test]
    async fn test_register_taken_email() {
        let mut service = MockTestAuthService::new();

        service
            .expect_register()
            .times(1)
            .returning(|command| Err(AuthError::AlreadyExists(command.email.to_string())));

        let status = register(Arc::new(service), request("ana@x.com")).await.unwrap_err();
        assert_eq!(status.code(), Code::AlreadyExists);
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use secrecy::ExposeSecret;

use crate::account::errors::AuthError;
use crate::account::errors::DirectoryError;
use crate::account::models::LoginCommand;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::UserId;
use crate::account::ports::AuthServicePort;
use crate::account::ports::UserDirectory;

/// Domain service implementation for registration and login.
///
/// Holds no mutable state of its own; the directory owns the user table and
/// the authenticator carries the signing secret and token lifetime.
pub struct AuthService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    authenticator: Arc<Authenticator>,
}

impl<D> AuthService<D>
where
    D: UserDirectory,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    ///
    /// # Returns
    /// Configured auth service instance
    pub fn new(directory: Arc<D>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            directory,
            authenticator,
        }
    }
}

#[async_trait]
impl<D> AuthServicePort for AuthService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError> {
        // Best-effort pre-check; the directory settles races on create
        match self.directory.find_by_email(&command.email).await {
            Ok(_) => return Err(AuthError::AlreadyExists(command.email.to_string())),
            Err(DirectoryError::NotFound) => {}
            Err(e) => return Err(AuthError::internal(e)),
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose_secret())
            .map_err(AuthError::internal)?;

        let user = NewUser {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
        };

        self.directory.create(user).await.map_err(|e| match e {
            DirectoryError::EmailTaken(email) => AuthError::AlreadyExists(email),
            other => AuthError::internal(other),
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<String, AuthError> {
        let password = command.password.expose_secret();

        // Lookup failures of any kind must look like a wrong password
        let user = match self.directory.find_by_email(&command.email).await {
            Ok(user) => user,
            Err(_) => return Err(self.authenticator.reject(password).into()),
        };

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, user.id)?;

        Ok(result.access_token)
    }
}

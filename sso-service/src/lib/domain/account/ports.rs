use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::errors::DirectoryError;
use crate::account::models::EmailAddress;
use crate::account::models::LoginCommand;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::User;
use crate::account::models::UserId;

/// Port for credential operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing names, email, and password
    ///
    /// # Returns
    /// Identifier assigned by the directory
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `Internal` - Hashing or persistence failed
    async fn register(&self, command: RegisterCommand) -> Result<UserId, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Internal` - Token generation failed
    async fn login(&self, command: LoginCommand) -> Result<String, AuthError>;
}

/// Persistence operations for user identities.
///
/// Implementations own all shared mutable state and are the authority for
/// email uniqueness: two concurrent `create` calls for one email must not
/// both succeed.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Arguments
    /// * `user` - User record without identifier
    ///
    /// # Returns
    /// Identifier assigned to the new user
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `Unavailable` - Storage operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, DirectoryError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Normalized email address
    ///
    /// # Returns
    /// User entity
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `Unavailable` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, DirectoryError>;
}

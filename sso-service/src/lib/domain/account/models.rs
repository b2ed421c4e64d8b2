use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use secrecy::SecretString;
use uuid::Uuid;

use crate::account::errors::InputError;

/// User aggregate entity.
///
/// Represents a registered identity. `Debug` never prints the password hash.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Normalized on construction (surrounding whitespace trimmed, ASCII
/// lowercased) so that lookups and the uniqueness constraint agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new normalized email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Normalized EmailAddress value object
    ///
    /// # Errors
    /// * `Missing` - Email is empty or whitespace
    pub fn new(email: String) -> Result<Self, InputError> {
        let normalized = email.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(InputError::Missing("email"));
        }
        Ok(Self(normalized))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user
#[derive(Debug)]
pub struct RegisterCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password: SecretString,
}

impl RegisterCommand {
    /// Construct a register command from raw request fields.
    ///
    /// # Arguments
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `email` - Email address (normalized)
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Errors
    /// * `Missing` - Any field is empty
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<Self, InputError> {
        Ok(Self {
            first_name: required("first name", first_name)?,
            last_name: required("last name", last_name)?,
            email: EmailAddress::new(email)?,
            password: SecretString::new(required("password", password)?),
        })
    }
}

/// Command to log in with email and password
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: SecretString,
}

impl LoginCommand {
    /// Construct a login command from raw request fields.
    ///
    /// # Errors
    /// * `Missing` - Email or password is empty
    pub fn new(email: String, password: String) -> Result<Self, InputError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: SecretString::new(required("password", password)?),
        })
    }
}

/// User record to be persisted by a directory, which assigns id and creation time
#[derive(Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

fn required(field: &'static str, value: String) -> Result<String, InputError> {
    if value.trim().is_empty() {
        Err(InputError::Missing(field))
    } else {
        Ok(value)
    }
}

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::account::errors::DirectoryError;
use crate::account::models::EmailAddress;
use crate::account::models::NewUser;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::ports::UserDirectory;

/// Process-local user directory.
///
/// Users are keyed by normalized email; `create` goes through the map's
/// entry API so the uniqueness check and the insert happen under one shard
/// lock.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<String, User>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create(&self, user: NewUser) -> Result<UserId, DirectoryError> {
        match self.users.entry(user.email.as_str().to_string()) {
            Entry::Occupied(_) => Err(DirectoryError::EmailTaken(user.email.to_string())),
            Entry::Vacant(slot) => {
                let id = UserId::new();
                slot.insert(User {
                    id,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                });
                Ok(id)
            }
        }
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<User, DirectoryError> {
        self.users
            .get(email.as_str())
            .map(|user| user.value().clone())
            .ok_or(DirectoryError::NotFound)
    }
}

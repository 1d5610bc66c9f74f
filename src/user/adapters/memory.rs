//! In-memory repository for user directory tests and local use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{EmailAddress, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, StoredUser>,
    email_index: HashMap<String, UserId>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    #[expect(dead_code, reason = "credential digests are held but never read back")]
    password_digest: String,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn store(&self, user: &User, password_digest: &str) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.users.contains_key(&user.id()) {
            return Err(UserRepositoryError::DuplicateUser(user.id()));
        }
        let email_key = user.email().as_str().to_owned();
        if state.email_index.contains_key(&email_key) {
            return Err(UserRepositoryError::DuplicateEmail(user.email().clone()));
        }

        state.email_index.insert(email_key, user.id());
        state.users.insert(
            user.id(),
            StoredUser {
                user: user.clone(),
                password_digest: password_digest.to_owned(),
            },
        );
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(stored) = state.users.get_mut(&user.id()) else {
            return Err(UserRepositoryError::NotFound(user.id()));
        };
        stored.user = user.clone();
        Ok(())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(stored) = state.users.remove(&id) else {
            return Err(UserRepositoryError::NotFound(id));
        };
        state.email_index.remove(stored.user.email().as_str());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.users.get(&id).map(|stored| stored.user.clone()))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let user = state
            .email_index
            .get(email.as_str())
            .and_then(|id| state.users.get(id))
            .map(|stored| stored.user.clone());
        Ok(user)
    }

    async fn list(&self) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut users: Vec<User> = state.users.values().map(|s| s.user.clone()).collect();
        users.sort_by_key(User::created_at);
        Ok(users)
    }
}

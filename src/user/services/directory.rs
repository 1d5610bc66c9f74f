//! Service layer for account bootstrap and admin-driven user management.

use crate::auth::{AccessError, Principal};
use crate::user::{
    domain::{EmailAddress, Role, User, UserDomainError, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use mockable::Clock;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for the public administrator bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAdminRequest {
    /// Display name.
    pub name: String,
    /// Email address used for login.
    pub email: String,
    /// Raw password; only its digest is ever stored.
    pub password: String,
}

/// Request payload for admin-initiated worker creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWorkerRequest {
    /// Display name.
    pub name: String,
    /// Email address used for login.
    pub email: String,
    /// Raw password; only its digest is ever stored.
    pub password: String,
}

/// Request payload for updating an existing account.
///
/// Email addresses are immutable; only the display name and role can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// New display name, when present.
    pub name: Option<String>,
    /// New role, when present.
    pub role: Option<Role>,
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Role or ownership check failed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The referenced user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserDirectoryService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers the bootstrap administrator account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError`] when validation fails or the email is
    /// already registered.
    pub async fn register_admin(&self, request: RegisterAdminRequest) -> UserDirectoryResult<User> {
        let digest = password_digest(&request.password)?;
        let user = User::new(request.name, request.email, Role::Admin, &*self.clock)?;
        self.repository.store(&user, &digest).await?;
        tracing::debug!(user_id = %user.id(), "administrator account registered");
        Ok(user)
    }

    /// Creates a worker account on behalf of an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Access`] when the actor is not an
    /// administrator, and [`UserDirectoryError`] validation or repository
    /// variants otherwise.
    pub async fn create_worker(
        &self,
        actor: &Principal,
        request: CreateWorkerRequest,
    ) -> UserDirectoryResult<User> {
        actor.ensure_admin()?;
        let digest = password_digest(&request.password)?;
        let user = User::new(request.name, request.email, Role::Worker, &*self.clock)?;
        self.repository.store(&user, &digest).await?;
        tracing::debug!(user_id = %user.id(), "worker account created");
        Ok(user)
    }

    /// Updates an account's name and/or role.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist
    /// and [`UserDirectoryError::Access`] when the actor is not an
    /// administrator.
    pub async fn update_user(
        &self,
        actor: &Principal,
        id: UserId,
        request: UpdateUserRequest,
    ) -> UserDirectoryResult<User> {
        actor.ensure_admin()?;
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserDirectoryError::NotFound(id))?;

        if let Some(name) = request.name {
            user.rename(name)?;
        }
        if let Some(role) = request.role {
            user.change_role(role);
        }

        self.repository.update(&user).await?;
        Ok(user)
    }

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Access`] when the actor is not an
    /// administrator and [`UserDirectoryError::NotFound`] when the user does
    /// not exist.
    pub async fn delete_user(&self, actor: &Principal, id: UserId) -> UserDirectoryResult<()> {
        actor.ensure_admin()?;
        match self.repository.delete(id).await {
            Ok(()) => Ok(()),
            Err(UserRepositoryError::NotFound(missing)) => {
                Err(UserDirectoryError::NotFound(missing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves a user by identifier.
    ///
    /// Returns `Ok(None)` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn user(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let result: UserRepositoryResult<Option<User>> = self.repository.find_by_id(id).await;
        Ok(result?)
    }

    /// Retrieves a user by email address; the lookup the login flow uses.
    ///
    /// The address is normalized before the lookup, so the match is
    /// case-insensitive. Returns `Ok(None)` when no account uses the
    /// address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when the address does not
    /// parse and [`UserDirectoryError::Repository`] when the lookup fails.
    pub async fn user_by_email(&self, email: &str) -> UserDirectoryResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.repository.find_by_email(&address).await?)
    }

    /// Lists all users ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when the listing fails.
    pub async fn users(&self) -> UserDirectoryResult<Vec<User>> {
        Ok(self.repository.list().await?)
    }
}

/// Computes the SHA-256 hex digest of a non-blank password.
fn password_digest(password: &str) -> Result<String, UserDomainError> {
    if password.trim().is_empty() {
        return Err(UserDomainError::BlankPassword);
    }
    let digest = Sha256::digest(password.as_bytes());
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

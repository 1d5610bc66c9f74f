//! User directory endpoints, administrator-facing.

use super::decode;
use crate::client::error::ApiResult;
use crate::client::transport::ApiClient;
use crate::user::domain::{Role, User, UserId};
use serde::Serialize;

/// Payload for `POST /users`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Role of the new account.
    pub role: Role,
}

/// Partial payload for `PATCH /users/{id}`. Email is immutable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserChanges {
    /// New display name, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New role, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Typed wrapper over the user directory endpoints.
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    /// Creates the service over a transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        decode(self.client.get("/users").await?)
    }

    /// Creates a user account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Forbidden`] for
    /// non-administrators.
    pub async fn create(&self, request: &NewUser) -> ApiResult<User> {
        let body = serde_json::to_value(request)?;
        decode(self.client.post("/users", body).await?)
    }

    /// Applies a partial update to a user account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn update(&self, id: UserId, changes: &UserChanges) -> ApiResult<User> {
        let body = serde_json::to_value(changes)?;
        decode(self.client.patch(&format!("/users/{id}"), body).await?)
    }

    /// Deletes a user account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn delete(&self, id: UserId) -> ApiResult<()> {
        self.client.delete(&format!("/users/{id}")).await?;
        Ok(())
    }
}

//! Authentication endpoints and session handover.

use super::decode;
use crate::auth::TokenPair;
use crate::client::error::ApiResult;
use crate::client::transport::ApiClient;
use crate::user::domain::User;
use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Refresh token, persisted but advisory only.
    pub refresh_token: String,
    /// The authenticated user.
    pub user: User,
}

/// Payload for `POST /auth/register-admin`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterAdminRequest {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Typed wrapper over the authentication endpoints.
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    /// Creates the service over a transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Logs in and persists the returned token pair to the session store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Auth`] on bad credentials.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let body = serde_json::to_value(request)?;
        let response: LoginResponse = decode(self.client.post("/auth/login", body).await?)?;
        self.client
            .session()
            .save(&TokenPair::new(response.access_token, response.refresh_token))?;
        Ok(response.user)
    }

    /// Bootstraps the first administrator account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Validation`] for blank
    /// fields or a taken email.
    pub async fn register_admin(&self, request: &RegisterAdminRequest) -> ApiResult<User> {
        let body = serde_json::to_value(request)?;
        decode(self.client.post("/auth/register-admin", body).await?)
    }

    /// Fetches the authenticated user. Role checks must derive from this,
    /// never from previously cached user data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Auth`] when the session is
    /// no longer valid.
    pub async fn me(&self) -> ApiResult<User> {
        decode(self.client.get("/auth/me").await?)
    }

    /// Logs out by clearing the stored session. Consumers must also clear
    /// the query cache.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError::Session`] when the store
    /// fails.
    pub fn logout(&self) -> ApiResult<()> {
        self.client.session().clear()?;
        Ok(())
    }
}

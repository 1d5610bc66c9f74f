//! Client-side error taxonomy and HTTP status mapping.

use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// [`ApiError::Auth`] is the only variant with a mandated side effect: the
/// transport clears the session before yielding it, and consumers must
/// discard cached entity data and return to the login surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the input (HTTP 400).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The session is missing, expired, or invalid (HTTP 401).
    #[error("authentication required: {0}")]
    Auth(String),

    /// A role or ownership check failed (HTTP 403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The referenced entity does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A status precondition failed server-side (HTTP 409).
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Any other non-success response.
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The request never produced a response. Retryable for reads only.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading or writing the local session record failed.
    #[error(transparent)]
    Session(#[from] crate::auth::SessionStoreError),
}

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Maps a non-success HTTP status and body to the error taxonomy.
    #[must_use]
    pub const fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::Validation(message),
            401 => Self::Auth(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::InvalidTransition(message),
            _ => Self::Server { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use rstest::rstest;

    #[rstest]
    #[case(400)]
    #[case(401)]
    #[case(403)]
    #[case(404)]
    #[case(409)]
    #[case(500)]
    fn status_codes_map_to_their_taxonomy_variant(#[case] status: u16) {
        let error = ApiError::from_status(status, "boom".to_owned());
        let matched = matches!(
            (status, &error),
            (400, ApiError::Validation(_))
                | (401, ApiError::Auth(_))
                | (403, ApiError::Forbidden(_))
                | (404, ApiError::NotFound(_))
                | (409, ApiError::InvalidTransition(_))
                | (500, ApiError::Server { status: 500, .. })
        );
        assert!(matched, "status {status} mapped to {error:?}");
    }
}

//! Evidence upload and retrieval endpoints.

use super::decode;
use crate::client::error::ApiResult;
use crate::client::transport::ApiClient;
use crate::task::domain::{Evidence, PhotoPayload, TaskId};
use reqwest::multipart::{Form, Part};

/// Typed wrapper over the evidence endpoints.
pub struct EvidenceService<'a> {
    client: &'a ApiClient,
}

impl<'a> EvidenceService<'a> {
    /// Creates the service over a transport.
    #[must_use]
    pub const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Uploads a completion photo for a task as multipart form data.
    ///
    /// The payload is validated non-empty at construction, so an empty
    /// photo can never reach the wire.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn upload(
        &self,
        task_id: TaskId,
        payload: &PhotoPayload,
        metadata: Option<String>,
    ) -> ApiResult<Evidence> {
        let photo = Part::bytes(payload.bytes().to_vec())
            .file_name(payload.file_name().to_owned())
            .mime_str(payload.content_type())?;
        let mut form = Form::new().part("photo", photo);
        if let Some(metadata) = metadata {
            form = form.text("metadata", metadata);
        }
        decode(
            self.client
                .post_multipart(&format!("/tasks/{task_id}/evidence"), form)
                .await?,
        )
    }

    /// Lists a task's evidence records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::client::error::ApiError`] per the taxonomy.
    pub async fn evidence(&self, task_id: TaskId) -> ApiResult<Vec<Evidence>> {
        decode(self.client.get(&format!("/tasks/{task_id}/evidence")).await?)
    }
}

use crate::wire::{ErrorEnvelope, commit_body};
use crate::{ProfileFields, ProfileStore, Session, StoreError, StoreResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as ReqwestClient;

/// Document store reached over its REST commit endpoint.
pub struct RestProfileStore {
    pub base_url: String,
    pub project_id: String,
    client: ReqwestClient,
    session: Session,
}

impl RestProfileStore {
    pub fn new(
        base_url: &str,
        project_id: &str,
        timeout: Duration,
        session: Session,
    ) -> StoreResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::network(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            client,
            session,
        })
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)/documents", self.project_id)
    }

    /// Full resource name of `collection/key`.
    pub fn document_name(&self, collection: &str, key: &str) -> String {
        format!("{}/{}/{}", self.database_path(), collection, key)
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    async fn put_document(
        &self,
        collection: &str,
        key: &str,
        fields: &ProfileFields,
    ) -> StoreResult<()> {
        let token = self
            .session
            .id_token()
            .ok_or_else(StoreError::unauthenticated)?;

        let url = format!("{}/v1/{}:commit", self.base_url, self.database_path());
        let body = commit_body(&self.document_name(collection, key), fields);

        debug!("Committing {collection}/{key} ({} fields)", fields.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let bytes = response.bytes().await?;
        let message = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => envelope.error.message,
            Err(_) => String::from_utf8_lossy(&bytes).chars().take(200).collect(),
        };
        Err(StoreError::rejected(status.as_u16(), message))
    }
}

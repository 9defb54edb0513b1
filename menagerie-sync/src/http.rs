//! REST implementation of [`ResourceApi`].
//!
//! Each kind maps to one collection path under the configured base URL:
//! `GET`/`POST /<segment>`, `PUT`/`DELETE /<segment>/<id>`. Error bodies
//! are expected to carry a human-readable `message` field.

use crate::api::ResourceApi;
use crate::config::ApiConfig;
use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use menagerie_types::{Draft, Record, RecordId, ResourceKind};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// Error body returned by the service on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// reqwest-backed record service client.
pub struct HttpResourceApi {
    config: ApiConfig,
    base_url: String,
    client: Client,
}

impl HttpResourceApi {
    /// Creates a client for the service at `config.base_url`.
    pub fn new(config: ApiConfig) -> SyncResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(SyncError::Config("base_url must not be empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SyncError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// URL of the collection for `kind`.
    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.path_segment())
    }

    /// URL of a single record. The id is percent-encoded.
    pub fn record_url(&self, kind: ResourceKind, id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.collection_url(kind),
            urlencoding::encode(id.as_str())
        )
    }

    /// Sends `request` and maps transport failures and non-success statuses.
    async fn send(&self, op: &str, request: RequestBuilder) -> SyncResult<Response> {
        let request = match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::Transport(format!("{op} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            debug!("{} rejected with {}: {}", op, status, body);
            return Err(SyncError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Best-effort decode of a record echoed back by a mutation.
    async fn echoed_record(kind: ResourceKind, response: Response) -> Option<Record> {
        let body = response.text().await.ok()?;
        if body.trim().is_empty() {
            return None;
        }
        let value: serde_json::Value = serde_json::from_str(&body).ok()?;
        match Record::decode(kind, value) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("ignoring unexpected {} response body: {}", kind, e);
                None
            }
        }
    }
}

#[async_trait]
impl ResourceApi for HttpResourceApi {
    fn describe(&self) -> String {
        format!("REST service at {}", self.base_url)
    }

    async fn list(&self, kind: ResourceKind) -> SyncResult<Vec<Record>> {
        let url = self.collection_url(kind);
        debug!("GET {}", url);

        let response = self
            .send(&format!("list {}", kind.plural()), self.client.get(&url))
            .await?;

        let values: Vec<serde_json::Value> = response.json().await.map_err(|e| {
            SyncError::Protocol(format!("failed to parse {} list: {e}", kind.plural()))
        })?;

        let records = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Record::decode(kind, value).map_err(|e| {
                    SyncError::Protocol(format!(
                        "invalid {} at index {index}: {e}",
                        kind.label().to_lowercase()
                    ))
                })
            })
            .collect::<SyncResult<Vec<_>>>()?;

        debug!("Fetched {} {}", records.len(), kind.plural());
        Ok(records)
    }

    async fn create(&self, draft: &Draft) -> SyncResult<Option<Record>> {
        let kind = draft.kind();
        let url = self.collection_url(kind);
        debug!("POST {}", url);

        let response = self
            .send(
                &format!("create {}", kind.label().to_lowercase()),
                self.client.post(&url).json(draft),
            )
            .await?;

        let created = Self::echoed_record(kind, response).await;
        match &created {
            Some(record) => info!("Created {} (id: {})", kind.label(), record.id()),
            None => info!("Created {}", kind.label()),
        }
        Ok(created)
    }

    async fn update(
        &self,
        kind: ResourceKind,
        id: &RecordId,
        draft: &Draft,
    ) -> SyncResult<Option<Record>> {
        draft.expect_kind(kind)?;
        let url = self.record_url(kind, id);
        debug!("PUT {}", url);

        let response = self
            .send(
                &format!("update {}", kind.label().to_lowercase()),
                self.client.put(&url).json(draft),
            )
            .await?;

        info!("Updated {} (id: {})", kind.label(), id);
        Ok(Self::echoed_record(kind, response).await)
    }

    async fn delete(&self, kind: ResourceKind, id: &RecordId) -> SyncResult<()> {
        let url = self.record_url(kind, id);
        debug!("DELETE {}", url);

        self.send(
            &format!("delete {}", kind.label().to_lowercase()),
            self.client.delete(&url),
        )
        .await?;

        info!("Deleted {} (id: {})", kind.label(), id);
        Ok(())
    }
}

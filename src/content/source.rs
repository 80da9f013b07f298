//! Live content source adapters.
//!
//! The resolution chain is parameterized by an ordered list of adapters so
//! that swapping or stacking backends never touches the chain logic. Each
//! adapter fetches *raw* records; normalization happens in one place, after
//! the chain picks a winner.
//!
//! Two adapters exist: [`RestSource`] for the remote content API and
//! [`TableSource`] for the managed BaaS table (PostgREST-style row
//! queries). Both share one pooled HTTP client owned by the application
//! state.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure taxonomy for one source attempt. Every variant is a reason for
/// the chain to move on to the next tier; none of them escapes the
/// resolver as a panic or raised error.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The deployment does not configure this capability.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Connection failure, DNS failure, or timeout.
    #[error("request failed: {0}")]
    Network(String),

    /// The source answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body could not be decoded as JSON.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Detail mode: the source answered cleanly but has no such record.
    #[error("record not found")]
    NotFound,
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound)
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceError::Network("request timed out".to_string())
        } else if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }
}

/// One candidate tier in the fallback chain.
///
/// `fetch_all` returns the raw collection body (bare array or `articles`
/// envelope); `fetch_one` returns one raw record. `insert` backs the
/// create operation and is optional per adapter.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logs and error strings.
    fn name(&self) -> &'static str;

    async fn fetch_all(&self) -> Result<Value, SourceError>;

    async fn fetch_one(&self, id: &str) -> Result<Value, SourceError>;

    async fn insert(&self, _record: &Value) -> Result<Value, SourceError> {
        Err(SourceError::NotConfigured(self.name()))
    }
}

/// Remote content API adapter.
///
/// `GET <base>/api/articles` for the list, `GET <base>/api/articles/<id>`
/// for one record. Requests carry a fixed timeout; a timeout is a tier
/// failure like any other.
pub struct RestSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RestSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeout,
        }
    }

    fn articles_url(&self) -> String {
        format!("{}/api/articles", self.base_url)
    }

    async fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(SourceError::from_reqwest)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound);
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        response.json().await.map_err(SourceError::from_reqwest)
    }
}

#[async_trait]
impl ContentSource for RestSource {
    fn name(&self) -> &'static str {
        "remote api"
    }

    async fn fetch_all(&self) -> Result<Value, SourceError> {
        self.get_json(&self.articles_url()).await
    }

    async fn fetch_one(&self, id: &str) -> Result<Value, SourceError> {
        self.get_json(&format!("{}/{id}", self.articles_url())).await
    }

    async fn insert(&self, record: &Value) -> Result<Value, SourceError> {
        let response = self
            .client
            .post(self.articles_url())
            .timeout(self.timeout)
            .json(record)
            .send()
            .await
            .map_err(SourceError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        response.json().await.map_err(SourceError::from_reqwest)
    }
}

/// BaaS table adapter: row-oriented queries against
/// `<url>/rest/v1/<table>` with an `apikey` header. Rows carry flattened
/// per-language columns; the normalizer takes them from there.
pub struct TableSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl TableSource {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
            table: table.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn rows(&self, builder: reqwest::RequestBuilder) -> Result<Value, SourceError> {
        let response = self
            .request(builder)
            .send()
            .await
            .map_err(SourceError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        response.json().await.map_err(SourceError::from_reqwest)
    }
}

#[async_trait]
impl ContentSource for TableSource {
    fn name(&self) -> &'static str {
        "content table"
    }

    async fn fetch_all(&self) -> Result<Value, SourceError> {
        // Full scan, newest first. Declaration order belongs to the bundle
        // tier only.
        self.rows(
            self.client
                .get(self.table_url())
                .query(&[("select", "*"), ("order", "created_at.desc")]),
        )
        .await
    }

    async fn fetch_one(&self, id: &str) -> Result<Value, SourceError> {
        let id_filter = format!("eq.{id}");
        let rows = self
            .rows(
                self.client.get(self.table_url()).query(&[
                    ("select", "*"),
                    ("id", id_filter.as_str()),
                    ("limit", "1"),
                ]),
            )
            .await?;
        match rows {
            Value::Array(mut items) if !items.is_empty() => Ok(items.remove(0)),
            Value::Array(_) => Err(SourceError::NotFound),
            other => Ok(other),
        }
    }

    async fn insert(&self, record: &Value) -> Result<Value, SourceError> {
        let rows = self
            .rows(
                self.client
                    .post(self.table_url())
                    .header("Prefer", "return=representation")
                    .json(&Value::Array(vec![record.clone()])),
            )
            .await?;
        match rows {
            Value::Array(mut items) if !items.is_empty() => Ok(items.remove(0)),
            other => Ok(other),
        }
    }
}

//! Layered content resolution.
//!
//! A fetch walks the configured live sources in order and always terminates
//! in the bundled static content, so every request ends in usable data or
//! an explicit not-found, never in a raised error. Tiers are attempted
//! strictly in sequence: a live source is always given the chance to fail
//! before the bundle is consulted.
//!
//! The chain's public contract is tri-state, see [`Outcome`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::content::bundle;
use crate::content::model::{Article, ArticleSet};
use crate::content::normalize::{normalize_collection, normalize_record};
use crate::content::source::{ContentSource, RestSource, SourceError, TableSource};

/// Terminal state of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A live source answered (or the bundle is the only configured tier).
    Fresh,
    /// Live sources failed; the bundle served the data. The error string is
    /// retained so the caller can surface a "showing saved content" notice.
    Fallback,
    /// Detail mode only: the id exists in no tier. No data.
    NotFound,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Fresh => "fresh",
            Outcome::Fallback => "fallback",
            Outcome::NotFound => "not_found",
        }
    }
}

/// What a resolution produced. `data` is present unless the outcome is
/// [`Outcome::NotFound`]; `error` is present unless it is [`Outcome::Fresh`].
#[derive(Debug, Clone)]
pub struct Resolution<T> {
    pub data: Option<T>,
    pub outcome: Outcome,
    pub error: Option<String>,
}

impl<T> Resolution<T> {
    fn fresh(data: T) -> Self {
        Self {
            data: Some(data),
            outcome: Outcome::Fresh,
            error: None,
        }
    }

    fn fallback(data: T, error: String) -> Self {
        Self {
            data: Some(data),
            outcome: Outcome::Fallback,
            error: Some(error),
        }
    }

    fn not_found(error: String) -> Self {
        Self {
            data: None,
            outcome: Outcome::NotFound,
            error: Some(error),
        }
    }
}

/// The fallback chain: ordered live sources, then the bundle.
pub struct ContentResolver {
    sources: Vec<Arc<dyn ContentSource>>,
}

impl ContentResolver {
    pub fn new(sources: Vec<Arc<dyn ContentSource>>) -> Self {
        Self { sources }
    }

    /// Build the chain from configuration. When both live sources are
    /// configured the remote API is consulted first, then the table; a
    /// deployment that wants a sole source configures only that source.
    pub fn from_config(config: &AppConfig, client: &reqwest::Client) -> Self {
        let mut sources: Vec<Arc<dyn ContentSource>> = Vec::new();
        if let Some(base_url) = config.api_base_url.as_deref().filter(|s| !s.is_empty()) {
            sources.push(Arc::new(RestSource::new(
                client.clone(),
                base_url,
                config.remote_timeout(),
            )));
        }
        if let (Some(url), Some(key)) = (
            config.baas_url.as_deref().filter(|s| !s.is_empty()),
            config.baas_api_key.as_deref().filter(|s| !s.is_empty()),
        ) {
            sources.push(Arc::new(TableSource::new(
                client.clone(),
                url,
                key,
                config.baas_table.clone(),
            )));
        }
        Self::new(sources)
    }

    /// Number of configured live tiers (the bundle is always there).
    pub fn live_source_count(&self) -> usize {
        self.sources.len()
    }

    /// Resolve the full article list.
    ///
    /// List mode never hard-fails: when every live source errors, the
    /// bundle's list is adopted unconditionally. The set's author always
    /// comes from the bundle; live records carry no author.
    pub async fn resolve_list(&self) -> Resolution<ArticleSet> {
        let author = bundle::article_set().author.clone();
        let mut last_error: Option<String> = None;

        for source in &self.sources {
            match source.fetch_all().await {
                Ok(raw) => {
                    let articles = normalize_collection(&raw);
                    tracing::debug!(source = source.name(), count = articles.len(), "list resolved");
                    return Resolution::fresh(ArticleSet { articles, author });
                }
                Err(err) => {
                    tracing::warn!(source = source.name(), error = %err, "list fetch failed");
                    last_error = Some(err.to_string());
                }
            }
        }

        let set = bundle::article_set().clone();
        match last_error {
            Some(error) => Resolution::fallback(set, error),
            // No live tier configured: the bundle is the primary source,
            // not a degraded copy of one.
            None => Resolution::fresh(set),
        }
    }

    /// Resolve a single article by id.
    ///
    /// An empty id short-circuits to not-found without any network attempt.
    /// A live source's clean not-found still lets the bundle answer; only
    /// when the id exists nowhere does the chain end with no data.
    pub async fn resolve_article(&self, id: &str) -> Resolution<Article> {
        if id.is_empty() {
            return Resolution::not_found("no article id provided".to_string());
        }

        let mut last_error: Option<String> = None;
        for source in &self.sources {
            match source.fetch_one(id).await {
                Ok(raw) => {
                    tracing::debug!(source = source.name(), id, "article resolved");
                    return Resolution::fresh(normalize_record(&raw));
                }
                Err(err) => {
                    tracing::warn!(source = source.name(), id, error = %err, "article fetch failed");
                    last_error = Some(err.to_string());
                }
            }
        }

        match bundle::find_article(id) {
            Some(article) => match last_error {
                Some(error) => Resolution::fallback(article.clone(), error),
                None => Resolution::fresh(article.clone()),
            },
            None => Resolution::not_found(
                last_error.unwrap_or_else(|| "article not found".to_string()),
            ),
        }
    }

    /// Create a record through the first live source that supports
    /// inserts. The bundle is immutable seed data and never written.
    pub async fn create_article(&self, record: Value) -> Result<Article, SourceError> {
        for source in &self.sources {
            match source.insert(&record).await {
                Ok(raw) => return Ok(normalize_record(&raw)),
                Err(SourceError::NotConfigured(_)) => continue,
                Err(err) => return Err(err),
            }
        }
        Err(SourceError::NotConfigured("live content source"))
    }
}

/// Token for one fetch attempt against a [`Latest`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Last-request-wins commit slot.
///
/// A consumer that re-fetches on every identifier change takes a ticket
/// before starting and commits with it after; a commit whose ticket has
/// been superseded is discarded. Late responses are thereby ignored, not
/// aborted: the in-flight request is allowed to finish, its result just
/// never sticks.
#[derive(Debug, Default)]
pub struct Latest<T> {
    current: AtomicU64,
    slot: Mutex<Option<(u64, T)>>,
}

impl<T: Clone> Latest<T> {
    pub fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
            slot: Mutex::new(None),
        }
    }

    /// Start a new fetch, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Commit a result. Returns false (and stores nothing) if a newer
    /// fetch began since this ticket was taken.
    pub fn commit(&self, ticket: Ticket, value: T) -> bool {
        let mut slot = self.slot.lock().expect("latest slot poisoned");
        if ticket.0 != self.current.load(Ordering::SeqCst) {
            return false;
        }
        *slot = Some((ticket.0, value));
        true
    }

    /// The most recently committed value, if any.
    pub fn get(&self) -> Option<T> {
        self.slot
            .lock()
            .expect("latest slot poisoned")
            .as_ref()
            .map(|(_, value)| value.clone())
    }
}

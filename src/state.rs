use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::content::resolver::ContentResolver;
use crate::error::{ServiceError, ServiceResult};

/// Shared application state: configuration, the pooled HTTP client behind
/// the live tiers, and the resolution chain built from both.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub resolver: Arc<ContentResolver>,
}

impl AppState {
    pub fn new(config: AppConfig) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(8)
            .build()
            .map_err(|err| ServiceError::Internal(err.to_string()))?;

        let resolver = ContentResolver::from_config(&config, &client);
        tracing::info!(
            live_sources = resolver.live_source_count(),
            rest = config.rest_configured(),
            table = config.table_configured(),
            "content chain assembled"
        );

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        })
    }
}

use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Service configuration.
///
/// Loaded from an optional `deepam.toml` next to the binary, overridden by
/// `DEEPAM__*` environment variables. Which live content tiers exist is
/// decided here: a tier whose settings are absent simply is not in the
/// chain. That is configuration, not an error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the remote content API, e.g. `https://cms.example.org`.
    /// Absent means the REST tier is not configured.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// BaaS project URL for the articles table. Absent means the table
    /// tier is not configured.
    #[serde(default)]
    pub baas_url: Option<String>,

    /// BaaS anon API key, required alongside `baas_url`.
    #[serde(default)]
    pub baas_api_key: Option<String>,

    /// BaaS table name holding article rows.
    #[serde(default = "default_baas_table")]
    pub baas_table: String,

    /// Per-request timeout for the remote API tier, in seconds.
    #[serde(default = "default_remote_timeout_secs")]
    pub remote_timeout_secs: u64,

    /// Inbound request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Enable CORS for the JSON API
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Analytics emission switch at startup
    #[serde(default = "default_true")]
    pub analytics_enabled: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            api_base_url: None,
            baas_url: None,
            baas_api_key: None,
            baas_table: default_baas_table(),
            remote_timeout_secs: default_remote_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            enable_cors: default_true(),
            analytics_enabled: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional config file and environment.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("deepam").required(false))
            .add_source(config::Environment::with_prefix("DEEPAM").separator("__"));

        let config: AppConfig = builder.build()?.try_deserialize()?;

        if !config.has_live_source() {
            tracing::info!("no live content source configured; serving bundled content only");
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.bind_addr, self.port).parse()?)
    }

    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn rest_configured(&self) -> bool {
        self.api_base_url.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn table_configured(&self) -> bool {
        self.baas_url.as_deref().is_some_and(|s| !s.is_empty())
            && self.baas_api_key.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_live_source(&self) -> bool {
        self.rest_configured() || self.table_configured()
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_baas_table() -> String {
    "articles".to_string()
}

fn default_remote_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

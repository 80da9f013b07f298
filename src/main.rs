//! deepam - bilingual devotional content server.
//!
//! Serves the reflection articles site: layered content resolution with a
//! bundled fallback, server-rendered pages, and a JSON API.

use deepam::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .json()
        .init();

    deepam::start_server(config).await?;

    Ok(())
}

//! Bilingual devotional content service.
//!
//! Articles live in up to three tiers (a remote content API, a BaaS
//! table, and a bundled seed file), in that fallback order. Whatever tier
//! answers, its records are normalized into one canonical model, rendered
//! section by section under a typed treatment policy, and served as HTML
//! pages and a JSON API. Language (Tamil or English) rides in the `la`
//! query parameter on every link.

pub mod analytics;
pub mod config;
pub mod content;
pub mod error;
pub mod lang;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod seo;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use content::{
    Article, ArticleSet, ContentResolver, ContentSource, Language, Latest, Localized, Outcome,
    Resolution, Section, SourceError,
};
pub use error::{ServiceError, ServiceResult};
pub use server::{build_router, start_server};
pub use state::AppState;

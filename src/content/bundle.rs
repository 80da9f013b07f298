//! Bundled static content, the final fallback tier.
//!
//! The seed file ships inside the binary, so this tier can never fail at
//! runtime: when every live source is down the site still serves these
//! articles in declaration order.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::content::model::{Article, ArticleSet, Localized};
use crate::content::normalize::normalize_record;

static SEED: &str = include_str!("../../assets/content.json");

static BUNDLE: Lazy<ArticleSet> = Lazy::new(|| {
    parse_bundle(SEED).unwrap_or_else(|err| {
        // An unparseable seed is a build defect, not a runtime condition;
        // degrade to an empty set instead of panicking in a request path.
        tracing::error!(error = %err, "bundled content failed to parse");
        ArticleSet {
            articles: Vec::new(),
            author: Localized::default(),
        }
    })
});

/// The full bundled article set, normalized, in declaration order.
pub fn article_set() -> &'static ArticleSet {
    &BUNDLE
}

/// Exact-match lookup into the bundle.
pub fn find_article(id: &str) -> Option<&'static Article> {
    BUNDLE.find(id)
}

fn parse_bundle(seed: &str) -> Result<ArticleSet, serde_json::Error> {
    let raw: Value = serde_json::from_str(seed)?;
    let articles = raw
        .get("pages")
        .and_then(Value::as_array)
        .map(|pages| pages.iter().map(normalize_record).collect())
        .unwrap_or_default();
    let author: Localized<String> = raw
        .get("author")
        .cloned()
        .map(serde_json::from_value)
        .transpose()?
        .unwrap_or_default();
    Ok(ArticleSet { articles, author })
}

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::analytics;
use crate::content::bundle;
use crate::content::model::Language;
use crate::content::resolver::Outcome;
use crate::lang;
use crate::render::pages;
use crate::state::AppState;

// Each navigation reads the language fresh from the URL; there is no
// server-side language session. An invalid value keeps the default.
fn active_language(query: &str) -> Language {
    lang::resolve(query, Language::DEFAULT)
}

/// `GET /`: the home page.
pub async fn home(State(state): State<AppState>, RawQuery(query): RawQuery) -> Html<String> {
    let query = query.unwrap_or_default();
    let lang = active_language(&query);
    analytics::page_view("/", lang);

    let resolution = state.resolver.resolve_list().await;
    let degraded = resolution.outcome == Outcome::Fallback;
    let set = resolution
        .data
        .unwrap_or_else(|| bundle::article_set().clone());

    Html(pages::home(&set, lang, &query, degraded).into_string())
}

/// `GET /article/{id}`: one article.
///
/// A hard resolution failure renders the dedicated not-found page with an
/// HTTP 404, not a silent redirect back home.
pub async fn article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let query = query.unwrap_or_default();
    let lang = active_language(&query);

    let resolution = state.resolver.resolve_article(&id).await;
    match resolution.data {
        Some(article) => {
            analytics::article_view(&article.id, lang);
            let degraded = resolution.outcome == Outcome::Fallback;
            let author = &bundle::article_set().author;
            Html(pages::article(&article, author, lang, &query, degraded).into_string())
                .into_response()
        }
        None => not_found_response(lang),
    }
}

/// Fallback handler for every unknown route.
pub async fn not_found(RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    not_found_response(active_language(&query))
}

fn not_found_response(lang: Language) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found(lang).into_string()),
    )
        .into_response()
}

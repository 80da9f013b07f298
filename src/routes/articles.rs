use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::content::bundle;
use crate::content::model::{Article, Localized, Section};
use crate::content::resolver::Outcome;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

/// List response: the chain's tri-state contract over the full set.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub status: &'static str,
    pub error: Option<String>,
    pub author: Localized<String>,
    pub articles: Vec<Article>,
}

/// Detail response. `article` is absent exactly when `status` is
/// `not_found`.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub status: &'static str,
    pub error: Option<String>,
    pub article: Option<Article>,
}

/// `GET /api/articles`
pub async fn list_articles(State(state): State<AppState>) -> Json<ListResponse> {
    let resolution = state.resolver.resolve_list().await;
    let set = resolution
        .data
        .unwrap_or_else(|| bundle::article_set().clone());
    Json(ListResponse {
        status: resolution.outcome.as_str(),
        error: resolution.error,
        author: set.author,
        articles: set.articles,
    })
}

/// `GET /api/articles/{id}`
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let resolution = state.resolver.resolve_article(&id).await;
    let status = match resolution.outcome {
        Outcome::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    let body = ArticleResponse {
        status: resolution.outcome.as_str(),
        error: resolution.error,
        article: resolution.data,
    };
    (status, Json(body)).into_response()
}

/// Request body for the create operation, in the flattened row shape the
/// live sources store.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title_tamil: String,
    pub title_english: String,
    #[serde(default)]
    pub content_tamil: Vec<Section>,
    #[serde(default)]
    pub content_english: Vec<Section>,
    #[serde(default)]
    pub theme: Option<String>,
}

/// `POST /api/articles`
///
/// Forwards to the first configured live source; the bundle is never
/// written. Responds with the normalized record.
pub async fn create_article(
    State(state): State<AppState>,
    Json(request): Json<CreateArticleRequest>,
) -> ServiceResult<impl IntoResponse> {
    if request.title_tamil.trim().is_empty() && request.title_english.trim().is_empty() {
        return Err(ServiceError::BadRequest(
            "a title is required in at least one language".to_string(),
        ));
    }

    let record = json!({
        "title_tamil": request.title_tamil,
        "title_english": request.title_english,
        "content_tamil": request.content_tamil,
        "content_english": request.content_english,
        "theme": request.theme.unwrap_or_default(),
    });

    let article = state.resolver.create_article(record).await?;
    crate::analytics::emit("article_created", &[("article_id", article.id.as_str())]);
    Ok((StatusCode::CREATED, Json(article)))
}

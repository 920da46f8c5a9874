use crate::application::http::extractors::parse_id;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::article::entities::Article;
use newswire_core::domain::article::ports::ArticleService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetArticleResponse {
    pub article: Article,
}

#[utoipa::path(
    get,
    path = "/{article_id}",
    tag = "article",
    summary = "Get article",
    description = "Retrieves a single article by id, with its live comment count.",
    params(
        ("article_id" = i32, Path, description = "Article id"),
    ),
    responses(
        (status = 200, body = GetArticleResponse)
    ),
)]
pub async fn get_article(
    Path(article_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetArticleResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;

    let article = state
        .service
        .get_article(article_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetArticleResponse { article }))
}

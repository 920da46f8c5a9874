use crate::application::http::article::validators::UpdateArticleVotesValidator;
use crate::application::http::extractors::{StrictJson, parse_id};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::article::entities::Article;
use newswire_core::domain::article::ports::ArticleService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateArticleResponse {
    pub article: Article,
}

#[utoipa::path(
    patch,
    path = "/{article_id}",
    tag = "article",
    summary = "Update article votes",
    description = "Adjusts an article's vote count by `inc_votes`, which may be negative.",
    params(
        ("article_id" = i32, Path, description = "Article id"),
    ),
    responses(
        (status = 200, body = UpdateArticleResponse)
    ),
    request_body = UpdateArticleVotesValidator
)]
pub async fn update_article(
    Path(article_id): Path<String>,
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<UpdateArticleVotesValidator>,
) -> Result<Response<UpdateArticleResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    payload.validate().map_err(ApiError::from)?;
    let inc_votes = payload.inc_votes.unwrap_or_default();

    let article = state
        .service
        .update_article_votes(article_id, inc_votes)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateArticleResponse { article }))
}

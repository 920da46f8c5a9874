use crate::application::http::extractors::parse_id;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use newswire_core::domain::article::ports::ArticleService;

#[utoipa::path(
    delete,
    path = "/{article_id}",
    tag = "article",
    summary = "Delete article",
    description = "Deletes an article and all of its comments in one transaction.",
    params(
        ("article_id" = i32, Path, description = "Article id"),
    ),
    responses(
        (status = 204, description = "Article deleted")
    ),
)]
pub async fn delete_article(
    Path(article_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let article_id = parse_id(&article_id)?;

    state
        .service
        .delete_article(article_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

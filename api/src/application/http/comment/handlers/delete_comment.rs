use crate::application::http::extractors::parse_id;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use newswire_core::domain::comment::ports::CommentService;

#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "comment",
    summary = "Delete comment",
    description = "Deletes a comment by id.",
    params(
        ("comment_id" = i32, Path, description = "Comment id"),
    ),
    responses(
        (status = 204, description = "Comment deleted")
    ),
)]
pub async fn delete_comment(
    Path(comment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&comment_id)?;

    state
        .service
        .delete_comment(comment_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

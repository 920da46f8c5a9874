use crate::application::http::comment::validators::UpdateCommentVotesValidator;
use crate::application::http::extractors::{StrictJson, parse_id};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::comment::entities::Comment;
use newswire_core::domain::comment::ports::CommentService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCommentResponse {
    pub comment: Comment,
}

#[utoipa::path(
    patch,
    path = "/comments/{comment_id}",
    tag = "comment",
    summary = "Update comment votes",
    description = "Adjusts a comment's vote count by `inc_votes`, which may be negative.",
    params(
        ("comment_id" = i32, Path, description = "Comment id"),
    ),
    responses(
        (status = 200, body = UpdateCommentResponse)
    ),
    request_body = UpdateCommentVotesValidator
)]
pub async fn update_comment(
    Path(comment_id): Path<String>,
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<UpdateCommentVotesValidator>,
) -> Result<Response<UpdateCommentResponse>, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    payload.validate().map_err(ApiError::from)?;
    let inc_votes = payload.inc_votes.unwrap_or_default();

    let comment = state
        .service
        .update_comment_votes(comment_id, inc_votes)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCommentResponse { comment }))
}

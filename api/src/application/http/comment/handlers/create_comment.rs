use crate::application::http::comment::validators::CreateCommentValidator;
use crate::application::http::extractors::{StrictJson, parse_id};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::comment::entities::Comment;
use newswire_core::domain::comment::ports::CommentService;
use newswire_core::domain::comment::value_objects::CreateCommentInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCommentResponse {
    pub comment: Comment,
}

#[utoipa::path(
    post,
    path = "/articles/{article_id}/comments",
    tag = "comment",
    summary = "Create comment",
    description = "Posts a new comment on an article.",
    params(
        ("article_id" = i32, Path, description = "Article id"),
    ),
    responses(
        (status = 201, body = CreateCommentResponse)
    ),
    request_body = CreateCommentValidator
)]
pub async fn create_comment(
    Path(article_id): Path<String>,
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateCommentValidator>,
) -> Result<Response<CreateCommentResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    payload.validate().map_err(ApiError::from)?;

    let comment = state
        .service
        .create_comment(
            article_id,
            CreateCommentInput {
                username: payload.username,
                body: payload.body,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCommentResponse { comment }))
}

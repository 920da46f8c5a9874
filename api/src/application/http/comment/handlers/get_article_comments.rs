use crate::application::http::extractors::{StrictQuery, parse_id};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::comment::entities::Comment;
use newswire_core::domain::comment::ports::CommentService;
use newswire_core::domain::comment::value_objects::ListCommentsInput;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct GetArticleCommentsQuery {
    pub limit: Option<i64>,
    pub p: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetArticleCommentsResponse {
    pub comments: Vec<Comment>,
}

#[utoipa::path(
    get,
    path = "/articles/{article_id}/comments",
    tag = "comment",
    summary = "Get article comments",
    description = "Retrieves a page of comments for an article, newest first.",
    params(
        ("article_id" = i32, Path, description = "Article id"),
        GetArticleCommentsQuery
    ),
    responses(
        (status = 200, body = GetArticleCommentsResponse)
    ),
)]
pub async fn get_article_comments(
    Path(article_id): Path<String>,
    State(state): State<AppState>,
    StrictQuery(query): StrictQuery<GetArticleCommentsQuery>,
) -> Result<Response<GetArticleCommentsResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;

    let comments = state
        .service
        .get_article_comments(
            article_id,
            ListCommentsInput {
                limit: query.limit,
                p: query.p,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetArticleCommentsResponse { comments }))
}

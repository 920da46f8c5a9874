use crate::application::http::article::validators::CreateArticleValidator;
use crate::application::http::extractors::StrictJson;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use newswire_core::domain::article::entities::Article;
use newswire_core::domain::article::ports::ArticleService;
use newswire_core::domain::article::value_objects::CreateArticleInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateArticleResponse {
    pub article: Article,
}

#[utoipa::path(
    post,
    path = "",
    tag = "article",
    summary = "Create article",
    description = "Creates a new article. The image url falls back to a stock image when omitted.",
    responses(
        (status = 201, body = CreateArticleResponse)
    ),
    request_body = CreateArticleValidator
)]
pub async fn create_article(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateArticleValidator>,
) -> Result<Response<CreateArticleResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let article = state
        .service
        .create_article(CreateArticleInput {
            author: payload.author,
            title: payload.title,
            body: payload.body,
            topic: payload.topic,
            article_img_url: payload.article_img_url,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateArticleResponse { article }))
}

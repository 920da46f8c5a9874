use crate::application::http::extractors::StrictQuery;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use newswire_core::domain::article::entities::ArticlePreview;
use newswire_core::domain::article::ports::ArticleService;
use newswire_core::domain::article::value_objects::ListArticlesInput;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(deny_unknown_fields)]
pub struct GetArticlesQuery {
    pub sorted_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
    pub limit: Option<i64>,
    pub p: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetArticlesResponse {
    pub articles: Vec<ArticlePreview>,
    pub total_count: i64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "article",
    summary = "Get articles",
    description = "Retrieves a page of article previews, optionally filtered by topic and sorted by any allowed column.",
    params(GetArticlesQuery),
    responses(
        (status = 200, body = GetArticlesResponse)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    StrictQuery(query): StrictQuery<GetArticlesQuery>,
) -> Result<Response<GetArticlesResponse>, ApiError> {
    let page = state
        .service
        .get_articles(ListArticlesInput {
            sorted_by: query.sorted_by,
            order: query.order,
            topic: query.topic,
            limit: query.limit,
            p: query.p,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetArticlesResponse {
        articles: page.articles,
        total_count: page.total_count,
    }))
}

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use newswire_core::domain::topic::entities::Topic;
use newswire_core::domain::topic::ports::TopicService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTopicsResponse {
    pub topics: Vec<Topic>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "topic",
    summary = "Get topics",
    description = "Retrieves every topic, ordered by slug.",
    responses(
        (status = 200, body = GetTopicsResponse)
    ),
)]
pub async fn get_topics(
    State(state): State<AppState>,
) -> Result<Response<GetTopicsResponse>, ApiError> {
    let topics = state.service.get_topics().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetTopicsResponse { topics }))
}

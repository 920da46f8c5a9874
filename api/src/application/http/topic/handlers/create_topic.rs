use crate::application::http::extractors::StrictJson;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::topic::validators::CreateTopicValidator;
use axum::extract::State;
use newswire_core::domain::topic::entities::Topic;
use newswire_core::domain::topic::ports::TopicService;
use newswire_core::domain::topic::value_objects::CreateTopicInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateTopicResponse {
    pub topic: Topic,
}

#[utoipa::path(
    post,
    path = "",
    tag = "topic",
    summary = "Create topic",
    description = "Creates a new topic from a slug and a description.",
    responses(
        (status = 201, body = CreateTopicResponse)
    ),
    request_body = CreateTopicValidator
)]
pub async fn create_topic(
    State(state): State<AppState>,
    StrictJson(payload): StrictJson<CreateTopicValidator>,
) -> Result<Response<CreateTopicResponse>, ApiError> {
    payload.validate().map_err(ApiError::from)?;

    let topic = state
        .service
        .create_topic(CreateTopicInput {
            slug: payload.slug,
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateTopicResponse { topic }))
}

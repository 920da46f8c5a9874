use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use newswire_core::domain::user::entities::User;
use newswire_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUsersResponse {
    pub users: Vec<User>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Get users",
    description = "Retrieves every registered user.",
    responses(
        (status = 200, body = GetUsersResponse)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<Response<GetUsersResponse>, ApiError> {
    let users = state.service.get_users().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetUsersResponse { users }))
}

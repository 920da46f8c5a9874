use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use newswire_core::domain::user::entities::User;
use newswire_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub user: User,
}

#[utoipa::path(
    get,
    path = "/{username}",
    tag = "user",
    summary = "Get user",
    description = "Retrieves a single user by username.",
    params(
        ("username" = String, Path, description = "Username"),
    ),
    responses(
        (status = 200, body = GetUserResponse)
    ),
)]
pub async fn get_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state
        .service
        .get_user_by_username(username)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse { user }))
}

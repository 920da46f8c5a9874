use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::server::api_entities::api_error::ApiError;

/// Query extractor that fails closed.
///
/// Listing query structs carry `#[serde(deny_unknown_fields)]`, so an
/// unrecognized parameter name or a non-numeric `limit`/`p` rejects the
/// whole request with the standard 400 body before any handler code runs.
#[derive(Debug, Clone)]
pub struct StrictQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for StrictQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or("");
        let value = serde_urlencoded::from_str::<T>(query).map_err(|_| ApiError::bad_request())?;
        Ok(StrictQuery(value))
    }
}

/// JSON body extractor whose rejection is the standard 400 body instead of
/// axum's plain-text default.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| ApiError::bad_request())?;
        Ok(StrictJson(value))
    }
}

/// Path ids must be well-formed integers before any query executes.
pub fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|_| ApiError::bad_request())
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use newswire_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Response-side error. The `Display` text of the client-error variants is
/// sent to the caller; internal errors keep their detail for the log only.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request() -> Self {
        ApiError::BadRequest("Bad Request".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every error body is `{"msg": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let msg = match &self {
            // Nothing internal leaks to the client.
            ApiError::InternalServerError(detail) => {
                error!("internal server error: {detail}");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorResponse { msg })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let msg = err.to_string();
        match err {
            CoreError::TopicNotFound
            | CoreError::ArticleNotFound
            | CoreError::CommentNotFound
            | CoreError::UserNotFound
            | CoreError::PageOutOfRange => ApiError::NotFound(msg),
            CoreError::InvalidInput | CoreError::BadRequest | CoreError::MissingFields(_) => {
                ApiError::BadRequest(msg)
            }
            CoreError::InternalServerError => ApiError::InternalServerError(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| {
                field_errors
                    .iter()
                    .filter_map(|field_error| field_error.message.as_ref())
                    .map(ToString::to_string)
            })
            .collect();
        messages.sort();

        if messages.is_empty() {
            ApiError::bad_request()
        } else {
            ApiError::BadRequest(messages.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_msg(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body.msg)
    }

    #[tokio::test]
    async fn not_found_keeps_the_entity_specific_message() {
        let (status, msg) = body_msg(ApiError::from(CoreError::ArticleNotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Article Not Found");
    }

    #[tokio::test]
    async fn page_out_of_range_is_a_plain_not_found() {
        let (status, msg) = body_msg(ApiError::from(CoreError::PageOutOfRange)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Not Found");
    }

    #[tokio::test]
    async fn invalid_input_and_missing_fields_are_bad_requests() {
        let (status, msg) = body_msg(ApiError::from(CoreError::InvalidInput)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Invalid Input");

        let (status, msg) = body_msg(ApiError::from(CoreError::MissingFields(
            "Username and body required".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Username and body required");
    }

    #[tokio::test]
    async fn internal_errors_never_leak_detail() {
        let (status, msg) =
            body_msg(ApiError::InternalServerError("pool exhausted".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Internal Server Error");
    }
}

use thiserror::Error;

/// Domain error taxonomy. The api layer translates each variant into an
/// HTTP status; the `Display` text becomes the response `msg` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Topic Not Found")]
    TopicNotFound,

    #[error("Article Not Found")]
    ArticleNotFound,

    #[error("Comment Not Found")]
    CommentNotFound,

    #[error("User Not Found")]
    UserNotFound,

    /// An explicitly requested page past the end of the result set.
    #[error("Not Found")]
    PageOutOfRange,

    /// Sort column or order outside the allow-list.
    #[error("Invalid Input")]
    InvalidInput,

    /// Malformed values: non-positive pagination, integrity violations,
    /// anything the storage engine rejects as a client mistake.
    #[error("Bad Request")]
    BadRequest,

    #[error("{0}")]
    MissingFields(String),

    #[error("Internal Server Error")]
    InternalServerError,
}

pub mod postgres;
pub mod query_builder;

use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// First stage of the error translation pipeline: storage-engine error
/// codes that signal a client mistake become `BadRequest`; everything else
/// is logged here and leaves the core as an opaque internal error.
///
/// 22P02 invalid text representation, 23502 not-null violation,
/// 23503 foreign-key violation, 23505 unique violation.
pub(crate) fn map_db_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err
        && matches!(
            db_err.code().as_deref(),
            Some("22P02" | "23502" | "23503" | "23505")
        )
    {
        return CoreError::BadRequest;
    }
    error!("database error: {err}");
    CoreError::InternalServerError
}

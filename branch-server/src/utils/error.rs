//! Error re-exports and repository error mapping

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

/// Default mapping for repository errors that reach the caller without a
/// more specific translation in the engine layer.
impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Conflict(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

//! Repository Module
//!
//! 每张表一个模块。读路径函数接收连接池；参与多行写事务的函数接收
//! 调用方事务上的 `&mut SqliteConnection`，由调用方决定提交或回滚。

pub mod branch;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod payment;

use rust_decimal::Decimal;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a stored decimal column (TEXT) back into a [`Decimal`].
///
/// Amount columns are written from `Decimal::to_string`, so a parse failure
/// means the row was corrupted outside this backend.
pub(crate) fn parse_amount(raw: &str) -> RepoResult<Decimal> {
    raw.parse()
        .map_err(|_| RepoError::Database(format!("Corrupt decimal value: {raw}")))
}

//! Shared types for the branch POS backend
//!
//! Common types used across crates: domain models, error codes,
//! unified API response structures, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};

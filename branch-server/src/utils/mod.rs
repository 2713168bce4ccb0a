//! 工具模块 - 错误映射与日志
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`AppResult`] - 统一 Result 别名
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode};
pub use result::AppResult;

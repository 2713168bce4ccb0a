//! Order Lifecycle Engine
//!
//! 订单生命周期：OPEN → IN_PROGRESS → SERVED → CLOSED，CANCELED 为终态
//! (仅管理通道写入，但所有守卫都把它当终态处理)。
//!
//! 每个多行写操作都在单个数据库事务内完成；并发控制完全依赖
//! `dining_table` 上的条件 UPDATE (见 [`crate::db::repository::dining_table`])，
//! 进程内不持有任何锁。事务提交前的任何错误直接返回，`Transaction` 被
//! drop 时自动回滚。

mod add_item;
mod fetch_order;
mod open_order;
mod take_payment;
pub mod tickets;

pub use add_item::{AddItemInput, add_item};
pub use fetch_order::fetch_order;
pub use open_order::{OpenOrderInput, open_order};
pub use take_payment::{TakePaymentInput, take_payment};

use crate::db::repository::RepoError;
use crate::utils::AppError;
use shared::error::ErrorCode;
use shared::models::Order;

pub(crate) fn db_err(e: sqlx::Error) -> AppError {
    AppError::database(e.to_string())
}

/// Terminal orders reject every mutation with `OrderFinalized`.
pub(crate) fn ensure_not_finalized(order: &Order) -> Result<(), AppError> {
    if order.status.is_terminal() {
        return Err(AppError::with_message(
            ErrorCode::OrderFinalized,
            format!("Order {} is already {}", order.id, order.status),
        ));
    }
    Ok(())
}

/// Map transition-primitive failures onto order error codes.
pub(crate) fn map_transition_err(e: RepoError) -> AppError {
    match e {
        RepoError::NotFound(msg) => AppError::with_message(ErrorCode::OrderNotFound, msg),
        RepoError::Conflict(msg) => AppError::with_message(ErrorCode::OrderFinalized, msg),
        other => other.into(),
    }
}

//! Open order operation
//!
//! Creates an OPEN order, claiming the table (if any) in the same
//! transaction.

use super::db_err;
use crate::db::DbService;
use crate::db::repository::{RepoError, branch, dining_table, order};
use crate::utils::{AppError, AppResult};
use shared::error::ErrorCode;
use shared::models::{Order, OrderStatus, OrderType};

#[derive(Debug, Clone)]
pub struct OpenOrderInput {
    pub branch_id: String,
    /// None for takeout/delivery
    pub table_id: Option<String>,
    pub order_type: OrderType,
}

/// Open a new order, optionally reserving a table.
///
/// 同一事务内完成桌台抢占与订单写入：守卫失败或订单写入失败时整体
/// 回滚，不会留下被占用却无订单的桌台。带桌台时抢占是事务首条语句，
/// 并发开同一桌台的败者会看到已提交的占用而得到 `TableNotAvailable`。
pub async fn open_order(db: &DbService, input: OpenOrderInput) -> AppResult<Order> {
    let mut tx = db.pool.begin().await.map_err(db_err)?;

    if let Some(table_id) = input.table_id.as_deref() {
        match dining_table::reserve(&mut tx, &input.branch_id, table_id).await {
            Ok(()) => {}
            Err(RepoError::NotFound(msg)) => {
                // Unknown table or unknown branch: look at the branch to
                // report the more specific error.
                let branch_exists = branch::find_by_id(&mut *tx, &input.branch_id)
                    .await?
                    .is_some();
                return Err(if branch_exists {
                    AppError::with_message(ErrorCode::TableNotFound, msg)
                } else {
                    AppError::with_message(
                        ErrorCode::BranchNotFound,
                        format!("Branch {} not found", input.branch_id),
                    )
                });
            }
            Err(RepoError::Conflict(msg)) => {
                return Err(AppError::with_message(ErrorCode::TableNotAvailable, msg));
            }
            Err(other) => return Err(other.into()),
        }
    } else if branch::find_by_id(&mut *tx, &input.branch_id)
        .await?
        .is_none()
    {
        return Err(AppError::with_message(
            ErrorCode::BranchNotFound,
            format!("Branch {} not found", input.branch_id),
        ));
    }

    let new_order = Order {
        id: shared::util::new_id(),
        branch_id: input.branch_id,
        table_id: input.table_id,
        order_type: input.order_type,
        status: OrderStatus::Open,
        opened_at: shared::util::now_millis(),
        closed_at: None,
    };
    order::insert(&mut tx, &new_order).await?;

    tx.commit().await.map_err(db_err)?;

    tracing::info!(
        order_id = %new_order.id,
        branch_id = %new_order.branch_id,
        table_id = ?new_order.table_id,
        order_type = ?new_order.order_type,
        "Order opened"
    );
    Ok(new_order)
}

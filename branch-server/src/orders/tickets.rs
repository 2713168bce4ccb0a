//! Ticket Workflow Bridge
//!
//! 厨房显示 (KDS) 视图：活跃订单按 opened_at 升序，先开先做。
//!
//! `advance_ticket` 不校验前序状态 —— 厨房可能直接对 OPEN 订单喊
//! "上菜" 而跳过 IN_PROGRESS，这是有意的宽松设计，不要收紧成严格
//! 状态机。唯一的硬性约束与其它路径一致：终态订单拒绝流转。

use super::{db_err, map_transition_err};
use crate::db::DbService;
use crate::db::repository::{RepoError, order};
use crate::utils::{AppError, AppResult};
use shared::error::ErrorCode;
use shared::models::{Order, OrderStatus, TicketView};

/// Active orders with their display items, earliest opened first.
pub async fn list_active_tickets(db: &DbService) -> AppResult<Vec<TicketView>> {
    let orders = order::list_active(&db.pool).await?;
    let mut items_by_order = order::find_active_items(&db.pool).await?;

    Ok(orders
        .into_iter()
        .map(|o| {
            let items = items_by_order.remove(&o.id).unwrap_or_default();
            TicketView { order: o, items }
        })
        .collect())
}

/// Advance a ticket to IN_PROGRESS (start) or SERVED (serve).
pub async fn advance_ticket(db: &DbService, order_id: &str, to: OrderStatus) -> AppResult<Order> {
    if !matches!(to, OrderStatus::InProgress | OrderStatus::Served) {
        return Err(AppError::invalid_request(format!(
            "Tickets can only advance to IN_PROGRESS or SERVED, not {to}"
        )));
    }

    let mut tx = db.pool.begin().await.map_err(db_err)?;
    let updated = order::transition_status(&mut tx, order_id, to, None)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::with_message(
                ErrorCode::TicketNotFound,
                format!("Ticket {order_id} not found"),
            ),
            other => map_transition_err(other),
        })?;
    tx.commit().await.map_err(db_err)?;

    tracing::info!(order_id = %updated.id, status = %updated.status, "Ticket advanced");
    Ok(updated)
}

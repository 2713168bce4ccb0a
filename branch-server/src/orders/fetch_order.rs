//! Fetch order operation
//!
//! Read-only view of the full aggregate; relies on the store's own read
//! consistency, no transaction needed.

use crate::db::DbService;
use crate::db::repository::{order, payment};
use crate::utils::{AppError, AppResult};
use shared::error::ErrorCode;
use shared::models::OrderDetail;

pub async fn fetch_order(db: &DbService, order_id: &str) -> AppResult<OrderDetail> {
    let pool = &db.pool;

    let target = order::find_by_id(pool, order_id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::OrderNotFound, format!("Order {order_id} not found"))
    })?;

    let items = order::find_items(pool, order_id).await?;
    let payments = payment::find_by_order(pool, order_id).await?;
    let tax_lines = payment::find_tax_lines(pool, order_id).await?;
    let tips = payment::find_tips(pool, order_id).await?;

    Ok(OrderDetail {
        order: target,
        items,
        payments,
        tax_lines,
        tips,
    })
}

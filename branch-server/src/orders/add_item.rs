//! Add item operation

use super::{db_err, ensure_not_finalized};
use crate::db::DbService;
use crate::db::repository::{menu_item, order};
use crate::utils::{AppError, AppResult};
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::OrderItem;

#[derive(Debug, Clone)]
pub struct AddItemInput {
    pub menu_item_id: String,
    pub qty: i64,
    /// Replaces the menu base price when supplied; must be positive.
    pub price_override: Option<Decimal>,
    pub notes: Option<String>,
}

/// Add a line item to an order, snapshotting the price.
///
/// 允许对 IN_PROGRESS / SERVED 订单加菜 (厨房补单)；终态订单拒绝。
/// 价格在此刻定格：之后改菜单价不影响已有行项。
pub async fn add_item(db: &DbService, order_id: &str, input: AddItemInput) -> AppResult<OrderItem> {
    if input.qty < 1 {
        return Err(AppError::validation(format!(
            "qty must be a positive integer, got {}",
            input.qty
        )));
    }
    if let Some(price) = input.price_override
        && price <= Decimal::ZERO
    {
        return Err(AppError::validation(format!(
            "price_override must be positive, got {price}"
        )));
    }

    let mut tx = db.pool.begin().await.map_err(db_err)?;

    let target = order::find_by_id(&mut *tx, order_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {order_id} not found"))
        })?;
    ensure_not_finalized(&target)?;

    let menu_item = menu_item::find_by_id(&mut *tx, &input.menu_item_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MenuItemNotFound,
                format!("Menu item {} not found", input.menu_item_id),
            )
        })?;

    let item = OrderItem {
        id: shared::util::new_id(),
        order_id: target.id.clone(),
        menu_item_id: menu_item.id,
        qty: input.qty,
        price: input.price_override.unwrap_or(menu_item.base_price),
        notes: input.notes,
    };
    order::insert_item(&mut tx, &item, shared::util::now_millis()).await?;

    tx.commit().await.map_err(db_err)?;

    tracing::debug!(
        order_id = %item.order_id,
        menu_item_id = %item.menu_item_id,
        qty = item.qty,
        "Item added"
    );
    Ok(item)
}

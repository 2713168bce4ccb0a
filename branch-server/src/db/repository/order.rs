//! Order Repository
//!
//! Order rows plus line items, and the single status-transition primitive
//! every lifecycle path goes through.

use std::collections::HashMap;

use super::{RepoError, RepoResult, parse_amount};
use shared::models::{Order, OrderItem, OrderItemDetail, OrderStatus};
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

const ORDER_COLUMNS: &str = "id, branch_id, table_id, type, status, opened_at, closed_at";

pub async fn insert(conn: &mut SqliteConnection, order: &Order) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, branch_id, table_id, type, status, opened_at, closed_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&order.id)
    .bind(&order.branch_id)
    .bind(order.table_id.as_deref())
    .bind(order.order_type)
    .bind(order.status)
    .bind(order.opened_at)
    .bind(order.closed_at)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn find_by_id<'a, E>(executor: E, id: &str) -> RepoResult<Option<Order>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(order)
}

/// Active orders (anything not CLOSED/CANCELED), earliest opened first.
pub async fn list_active(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders \
         WHERE status NOT IN ('CLOSED', 'CANCELED') ORDER BY opened_at ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Apply a status transition, refusing terminal orders.
///
/// 条件 UPDATE：终态订单 (`CLOSED`/`CANCELED`) 不在 WHERE 命中范围内，
/// `rows_affected == 0` 时再区分“订单不存在”与“订单已终结”。
/// 这是所有生命周期路径共用的唯一流转原语。
pub async fn transition_status(
    conn: &mut SqliteConnection,
    id: &str,
    to: OrderStatus,
    closed_at: Option<i64>,
) -> RepoResult<Order> {
    let rows = sqlx::query(
        "UPDATE orders SET status = ?, closed_at = COALESCE(?, closed_at) \
         WHERE id = ? AND status NOT IN ('CLOSED', 'CANCELED')",
    )
    .bind(to)
    .bind(closed_at)
    .bind(id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if rows == 0 {
        return match find_by_id(&mut *conn, id).await? {
            None => Err(RepoError::NotFound(format!("Order {id} not found"))),
            Some(order) => Err(RepoError::Conflict(format!(
                "Order {id} is already {}",
                order.status
            ))),
        };
    }

    find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Order {id} vanished mid-transaction")))
}

pub async fn insert_item(
    conn: &mut SqliteConnection,
    item: &OrderItem,
    created_at: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO order_item (id, order_id, menu_item_id, qty, price, notes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&item.id)
    .bind(&item.order_id)
    .bind(&item.menu_item_id)
    .bind(item.qty)
    .bind(item.price.to_string())
    .bind(item.notes.as_deref())
    .bind(created_at)
    .execute(conn)
    .await?;
    Ok(())
}

#[derive(sqlx::FromRow)]
struct ItemDetailRow {
    id: String,
    order_id: String,
    menu_item_id: String,
    sku: String,
    name: String,
    qty: i64,
    price: String,
    notes: Option<String>,
}

impl ItemDetailRow {
    fn into_detail(self) -> RepoResult<OrderItemDetail> {
        Ok(OrderItemDetail {
            price: parse_amount(&self.price)?,
            id: self.id,
            menu_item_id: self.menu_item_id,
            sku: self.sku,
            name: self.name,
            qty: self.qty,
            notes: self.notes,
        })
    }
}

/// Line items of one order, joined to the menu item, in add order.
pub async fn find_items<'a, E>(executor: E, order_id: &str) -> RepoResult<Vec<OrderItemDetail>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, ItemDetailRow>(
        "SELECT oi.id, oi.order_id, oi.menu_item_id, mi.sku, mi.name, oi.qty, oi.price, oi.notes \
         FROM order_item oi \
         JOIN menu_item mi ON mi.id = oi.menu_item_id \
         WHERE oi.order_id = ? \
         ORDER BY oi.created_at, oi.rowid",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    rows.into_iter().map(ItemDetailRow::into_detail).collect()
}

/// Line items of every active order, grouped by order id.
///
/// One query for the whole kitchen feed instead of one per ticket.
pub async fn find_active_items(
    pool: &SqlitePool,
) -> RepoResult<HashMap<String, Vec<OrderItemDetail>>> {
    let rows = sqlx::query_as::<_, ItemDetailRow>(
        "SELECT oi.id, oi.order_id, oi.menu_item_id, mi.sku, mi.name, oi.qty, oi.price, oi.notes \
         FROM order_item oi \
         JOIN menu_item mi ON mi.id = oi.menu_item_id \
         JOIN orders o ON o.id = oi.order_id \
         WHERE o.status NOT IN ('CLOSED', 'CANCELED') \
         ORDER BY oi.created_at, oi.rowid",
    )
    .fetch_all(pool)
    .await?;

    let mut grouped: HashMap<String, Vec<OrderItemDetail>> = HashMap::new();
    for row in rows {
        let order_id = row.order_id.clone();
        grouped
            .entry(order_id)
            .or_default()
            .push(row.into_detail()?);
    }
    Ok(grouped)
}

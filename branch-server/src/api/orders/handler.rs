//! Order API Handlers
//!
//! Handlers deserialize the request body, hand it to the order engine and
//! return the raw entity as JSON; errors carry structured codes via
//! [`crate::utils::AppError`].

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::ServerState;
use crate::orders::{self, AddItemInput, OpenOrderInput, TakePaymentInput};
use crate::utils::AppResult;
use shared::models::{Order, OrderDetail, OrderItem, OrderType, Payment, PaymentMethod, TaxLineInput};

/// Request body for opening an order
#[derive(Debug, Deserialize)]
pub struct OrderCreateBody {
    pub branch_id: String,
    /// Omit for takeout/delivery
    pub table_id: Option<String>,
    #[serde(default, rename = "type")]
    pub order_type: OrderType,
}

/// Request body for adding an item
#[derive(Debug, Deserialize)]
pub struct OrderItemBody {
    pub menu_item_id: String,
    #[serde(default = "default_qty")]
    pub qty: i64,
    pub price_override: Option<Decimal>,
    pub notes: Option<String>,
}

fn default_qty() -> i64 {
    1
}

/// Request body for taking a payment
#[derive(Debug, Deserialize)]
pub struct PaymentBody {
    pub method: PaymentMethod,
    pub amount: Decimal,
    #[serde(default)]
    pub tax_lines: Vec<TaxLineInput>,
    pub tip: Option<Decimal>,
    #[serde(default)]
    pub close: bool,
}

/// POST /api/orders - 开单（可选桌台预订）
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<OrderCreateBody>,
) -> AppResult<Json<Order>> {
    let order = orders::open_order(
        &state.db,
        OpenOrderInput {
            branch_id: body.branch_id,
            table_id: body.table_id,
            order_type: body.order_type,
        },
    )
    .await?;
    Ok(Json(order))
}

/// GET /api/orders/:id - 查单（含行项、支付、税目、小费）
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let detail = orders::fetch_order(&state.db, &id).await?;
    Ok(Json(detail))
}

/// POST /api/orders/:id/items - 加菜（价格此刻定格）
pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<OrderItemBody>,
) -> AppResult<Json<OrderItem>> {
    let item = orders::add_item(
        &state.db,
        &id,
        AddItemInput {
            menu_item_id: body.menu_item_id,
            qty: body.qty,
            price_override: body.price_override,
            notes: body.notes,
        },
    )
    .await?;
    Ok(Json(item))
}

/// POST /api/orders/:id/payments - 收款（可附税目/小费，可同时关单）
pub async fn take_payment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(body): Json<PaymentBody>,
) -> AppResult<Json<Payment>> {
    let payment = orders::take_payment(
        &state.db,
        &id,
        TakePaymentInput {
            method: body.method,
            amount: body.amount,
            tax_lines: body.tax_lines,
            tip: body.tip,
            close: body.close,
        },
    )
    .await?;
    Ok(Json(payment))
}

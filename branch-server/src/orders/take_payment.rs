//! Take payment operation
//!
//! Records a payment (with optional tax lines and tip) and optionally closes
//! the order and releases its table, all in one transaction. A partially
//! recorded payment with no close, or a close with no payment, is never
//! observable.

use super::{db_err, ensure_not_finalized, map_transition_err};
use crate::db::DbService;
use crate::db::repository::{dining_table, order, payment};
use crate::utils::{AppError, AppResult};
use rust_decimal::Decimal;
use shared::error::ErrorCode;
use shared::models::{OrderStatus, Payment, PaymentMethod, TaxLineInput, Tip};

#[derive(Debug, Clone)]
pub struct TakePaymentInput {
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub tax_lines: Vec<TaxLineInput>,
    /// Recorded when supplied, zero included; absent means no tip row.
    pub tip: Option<Decimal>,
    pub close: bool,
}

pub async fn take_payment(
    db: &DbService,
    order_id: &str,
    input: TakePaymentInput,
) -> AppResult<Payment> {
    if input.amount <= Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("Payment amount must be positive, got {}", input.amount),
        ));
    }

    let mut tx = db.pool.begin().await.map_err(db_err)?;

    let target = order::find_by_id(&mut *tx, order_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {order_id} not found"))
        })?;
    ensure_not_finalized(&target)?;

    let now = shared::util::now_millis();
    let record = Payment {
        id: shared::util::new_id(),
        order_id: target.id.clone(),
        method: input.method,
        amount: input.amount,
        created_at: now,
    };
    payment::insert(&mut tx, &record).await?;

    if !input.tax_lines.is_empty() {
        payment::insert_tax_lines(&mut tx, &target.id, &input.tax_lines, now).await?;
    }

    if let Some(tip_amount) = input.tip {
        let tip = Tip {
            id: shared::util::new_id(),
            order_id: target.id.clone(),
            amount: tip_amount,
            created_at: now,
        };
        payment::insert_tip(&mut tx, &tip).await?;
    }

    if input.close {
        order::transition_status(&mut tx, &target.id, OrderStatus::Closed, Some(now))
            .await
            .map_err(map_transition_err)?;

        // 桌台随最后一个活跃订单关闭而释放；外带/外送订单无桌台，跳过
        if let Some(table_id) = target.table_id.as_deref() {
            dining_table::release_if_idle(&mut tx, table_id).await?;
        }
    }

    tx.commit().await.map_err(db_err)?;

    tracing::info!(
        order_id = %record.order_id,
        method = ?record.method,
        amount = %record.amount,
        closed = input.close,
        "Payment taken"
    );
    Ok(record)
}

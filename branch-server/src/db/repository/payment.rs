//! Payment Repository
//!
//! Payments, tax lines and tips are append-only; nothing here updates or
//! deletes a money record.

use super::{RepoResult, parse_amount};
use shared::models::{Payment, PaymentMethod, TaxLine, TaxLineInput, Tip};
use sqlx::{Executor, Sqlite, SqliteConnection};

pub async fn insert(conn: &mut SqliteConnection, payment: &Payment) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO payment (id, order_id, method, amount, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&payment.id)
    .bind(&payment.order_id)
    .bind(payment.method)
    .bind(payment.amount.to_string())
    .bind(payment.created_at)
    .execute(conn)
    .await?;
    Ok(())
}

/// Batch-insert the tax lines supplied alongside a payment.
pub async fn insert_tax_lines(
    conn: &mut SqliteConnection,
    order_id: &str,
    lines: &[TaxLineInput],
    created_at: i64,
) -> RepoResult<Vec<TaxLine>> {
    let mut inserted = Vec::with_capacity(lines.len());
    for line in lines {
        let tax_line = TaxLine {
            id: shared::util::new_id(),
            order_id: order_id.to_string(),
            name: line.name.clone(),
            amount: line.amount,
            created_at,
        };
        sqlx::query(
            "INSERT INTO tax_line (id, order_id, name, amount, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&tax_line.id)
        .bind(&tax_line.order_id)
        .bind(&tax_line.name)
        .bind(tax_line.amount.to_string())
        .bind(tax_line.created_at)
        .execute(&mut *conn)
        .await?;
        inserted.push(tax_line);
    }
    Ok(inserted)
}

pub async fn insert_tip(conn: &mut SqliteConnection, tip: &Tip) -> RepoResult<()> {
    sqlx::query("INSERT INTO tip (id, order_id, amount, created_at) VALUES (?, ?, ?, ?)")
        .bind(&tip.id)
        .bind(&tip.order_id)
        .bind(tip.amount.to_string())
        .bind(tip.created_at)
        .execute(conn)
        .await?;
    Ok(())
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: String,
    order_id: String,
    method: PaymentMethod,
    amount: String,
    created_at: i64,
}

pub async fn find_by_order<'a, E>(executor: E, order_id: &str) -> RepoResult<Vec<Payment>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, PaymentRow>(
        "SELECT id, order_id, method, amount, created_at FROM payment \
         WHERE order_id = ? ORDER BY created_at, rowid",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    rows.into_iter()
        .map(|row| {
            Ok(Payment {
                amount: parse_amount(&row.amount)?,
                id: row.id,
                order_id: row.order_id,
                method: row.method,
                created_at: row.created_at,
            })
        })
        .collect()
}

#[derive(sqlx::FromRow)]
struct TaxLineRow {
    id: String,
    order_id: String,
    name: String,
    amount: String,
    created_at: i64,
}

pub async fn find_tax_lines<'a, E>(executor: E, order_id: &str) -> RepoResult<Vec<TaxLine>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, TaxLineRow>(
        "SELECT id, order_id, name, amount, created_at FROM tax_line \
         WHERE order_id = ? ORDER BY created_at, rowid",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    rows.into_iter()
        .map(|row| {
            Ok(TaxLine {
                amount: parse_amount(&row.amount)?,
                id: row.id,
                order_id: row.order_id,
                name: row.name,
                created_at: row.created_at,
            })
        })
        .collect()
}

#[derive(sqlx::FromRow)]
struct TipRow {
    id: String,
    order_id: String,
    amount: String,
    created_at: i64,
}

pub async fn find_tips<'a, E>(executor: E, order_id: &str) -> RepoResult<Vec<Tip>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, TipRow>(
        "SELECT id, order_id, amount, created_at FROM tip \
         WHERE order_id = ? ORDER BY created_at, rowid",
    )
    .bind(order_id)
    .fetch_all(executor)
    .await?;
    rows.into_iter()
        .map(|row| {
            Ok(Tip {
                amount: parse_amount(&row.amount)?,
                id: row.id,
                order_id: row.order_id,
                created_at: row.created_at,
            })
        })
        .collect()
}

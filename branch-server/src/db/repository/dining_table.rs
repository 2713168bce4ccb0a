//! Dining Table Repository
//!
//! 桌台占用守卫。`reserve` / `release_if_idle` 必须在调用方事务内执行，
//! 与订单写入一起提交或回滚。

use super::{RepoError, RepoResult};
use shared::models::DiningTable;
use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<DiningTable>> {
    let tables = sqlx::query_as::<_, DiningTable>(
        "SELECT id, branch_id, code, seats, status FROM dining_table ORDER BY branch_id, code",
    )
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn find_by_id<'a, E>(executor: E, id: &str) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, branch_id, code, seats, status FROM dining_table WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

pub async fn find_in_branch<'a, E>(
    executor: E,
    branch_id: &str,
    table_id: &str,
) -> RepoResult<Option<DiningTable>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, branch_id, code, seats, status FROM dining_table WHERE id = ? AND branch_id = ?",
    )
    .bind(table_id)
    .bind(branch_id)
    .fetch_optional(executor)
    .await?;
    Ok(table)
}

/// Claim a table for a new order.
///
/// 条件 UPDATE 即锁：`status = 'AVAILABLE'` 写进 WHERE 子句，靠
/// `rows_affected` 判断抢占结果。两个并发开单只有一个能改到这一行，
/// 败者得到 `Conflict`。作为事务内的首条写语句执行，失败的后续步骤
/// 回滚时会一并释放这里的占用。
pub async fn reserve(
    conn: &mut SqliteConnection,
    branch_id: &str,
    table_id: &str,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE dining_table SET status = 'OCCUPIED' \
         WHERE id = ? AND branch_id = ? AND status = 'AVAILABLE'",
    )
    .bind(table_id)
    .bind(branch_id)
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if rows == 1 {
        return Ok(());
    }

    // Zero rows: either the table is unknown to this branch, or a concurrent
    // request already claimed it.
    match find_in_branch(&mut *conn, branch_id, table_id).await? {
        None => Err(RepoError::NotFound(format!(
            "Table {table_id} not found in branch {branch_id}"
        ))),
        Some(table) => Err(RepoError::Conflict(format!(
            "Table {} is not available",
            table.code
        ))),
    }
}

/// Release a table after a closing transition when no active order remains.
///
/// 与状态流转同事务执行，避免“桌台已闲置但仍显示占用”的窗口。
pub async fn release_if_idle(conn: &mut SqliteConnection, table_id: &str) -> RepoResult<()> {
    let active: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM orders \
         WHERE table_id = ? AND status IN ('OPEN', 'IN_PROGRESS', 'SERVED')",
    )
    .bind(table_id)
    .fetch_one(&mut *conn)
    .await?;

    if active == 0 {
        sqlx::query("UPDATE dining_table SET status = 'AVAILABLE' WHERE id = ?")
            .bind(table_id)
            .execute(conn)
            .await?;
    }
    Ok(())
}

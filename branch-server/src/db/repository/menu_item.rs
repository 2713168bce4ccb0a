//! Menu Item Repository
//!
//! Read-only: catalog management happens outside this backend.

use super::{RepoResult, parse_amount};
use shared::models::MenuItem;
use sqlx::{Executor, Sqlite, SqlitePool};

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: String,
    branch_id: String,
    sku: String,
    name: String,
    base_price: String,
}

impl MenuItemRow {
    fn into_model(self) -> RepoResult<MenuItem> {
        Ok(MenuItem {
            base_price: parse_amount(&self.base_price)?,
            id: self.id,
            branch_id: self.branch_id,
            sku: self.sku,
            name: self.name,
        })
    }
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
        "SELECT id, branch_id, sku, name, base_price FROM menu_item ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(MenuItemRow::into_model).collect()
}

pub async fn find_by_id<'a, E>(executor: E, id: &str) -> RepoResult<Option<MenuItem>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, MenuItemRow>(
        "SELECT id, branch_id, sku, name, base_price FROM menu_item WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    row.map(MenuItemRow::into_model).transpose()
}

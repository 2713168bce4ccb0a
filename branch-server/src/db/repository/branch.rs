//! Branch Repository

use super::RepoResult;
use shared::models::Branch;
use sqlx::{Executor, Sqlite, SqlitePool};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Branch>> {
    let branches = sqlx::query_as::<_, Branch>(
        "SELECT id, name, created_at FROM branch ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;
    Ok(branches)
}

pub async fn find_by_id<'a, E>(executor: E, id: &str) -> RepoResult<Option<Branch>>
where
    E: Executor<'a, Database = Sqlite>,
{
    let branch =
        sqlx::query_as::<_, Branch>("SELECT id, name, created_at FROM branch WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(branch)
}

//! Branch API Handlers

use std::collections::HashMap;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{branch, dining_table};
use crate::utils::AppResult;
use shared::models::{Branch, DiningTable};

/// Branch with its tables, for frontends that browse instead of typing ids
#[derive(Debug, Serialize)]
pub struct BranchOverview {
    #[serde(flatten)]
    pub branch: Branch,
    pub tables: Vec<DiningTable>,
}

/// GET /api/branches - 门店列表（含桌台）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BranchOverview>>> {
    let branches = branch::find_all(&state.db.pool).await?;
    let tables = dining_table::find_all(&state.db.pool).await?;

    let mut tables_by_branch: HashMap<String, Vec<DiningTable>> = HashMap::new();
    for table in tables {
        tables_by_branch
            .entry(table.branch_id.clone())
            .or_default()
            .push(table);
    }

    let overview = branches
        .into_iter()
        .map(|b| {
            let tables = tables_by_branch.remove(&b.id).unwrap_or_default();
            BranchOverview { branch: b, tables }
        })
        .collect();
    Ok(Json(overview))
}

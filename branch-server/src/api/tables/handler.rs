//! Dining Table API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::dining_table;
use crate::utils::AppResult;
use shared::models::DiningTable;

/// GET /api/tables - 桌台列表（含占用状态）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_all(&state.db.pool).await?;
    Ok(Json(tables))
}

//! Menu API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::AppResult;
use shared::models::MenuItem;

/// GET /api/menus - 菜单列表（按名称排序）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = menu_item::find_all(&state.db.pool).await?;
    Ok(Json(items))
}

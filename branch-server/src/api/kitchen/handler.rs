//! Kitchen Display API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::orders::tickets;
use crate::utils::AppResult;
use shared::models::{Order, OrderStatus, TicketView};

/// GET /api/kds/tickets - 活跃工单（先开先做）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TicketView>>> {
    let active = tickets::list_active_tickets(&state.db).await?;
    Ok(Json(active))
}

/// POST /api/kds/tickets/:id/start - 开始制作 (IN_PROGRESS)
pub async fn start(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let updated = tickets::advance_ticket(&state.db, &id, OrderStatus::InProgress).await?;
    Ok(Json(updated))
}

/// POST /api/kds/tickets/:id/serve - 出餐 (SERVED)
pub async fn serve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let updated = tickets::advance_ticket(&state.db, &id, OrderStatus::Served).await?;
    Ok(Json(updated))
}

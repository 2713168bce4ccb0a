//! Dining Table API 模块 (只读：占用状态由订单引擎维护)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}

//! Kitchen Display (KDS) API 模块
//!
//! 工单视图与 start/serve 两个流转入口。

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/kds", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/tickets", get(handler::list))
        .route("/tickets/{id}/start", post(handler::start))
        .route("/tickets/{id}/serve", post(handler::serve))
}

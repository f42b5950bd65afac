use axum::{
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::handlers::checkout_handlers;
use crate::state::AppState;

pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        // Client bootstrap
        .route("/config", get(checkout_handlers::get_client_config))
        // Order lifecycle: create, then capture after payer approval
        .route("/orders", post(checkout_handlers::create_order))
        .route(
            "/orders/:order_id/capture",
            post(checkout_handlers::capture_order),
        )
        .route("/health", get(checkout_health))
}

async fn checkout_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "checkout",
        "timestamp": Utc::now().to_rfc3339(),
        "features": ["config", "create-order", "capture-order"]
    }))
}

// handlers/checkout_handlers.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::{AppError, Result};
use crate::models::cart::CartItem;
use crate::services::{cart_service, order_service};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// Client bootstrap data for the payment buttons. Degrades to an empty
/// clientId when credentials are missing instead of failing.
pub async fn get_client_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.config.get_config_info())
}

/// Normalize -> build -> create with the gateway. Validation failures return
/// before any gateway traffic, so no dangling order can exist for a bad cart.
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let normalized = cart_service::normalize(&state.config, &payload.items)?;
    let order = order_service::build_order_request(&state.config, normalized)?;

    let created = state.gateway.create_order(&order).await?;
    let order_id = created
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::GatewayApi {
            status: 502,
            body: created.clone(),
        })?;

    info!("Created PayPal order {}", order_id);
    Ok((StatusCode::CREATED, Json(json!({ "id": order_id }))))
}

/// Captures an approved order and hands the raw gateway payload back to the
/// client unchanged: the UI renders the gateway-reported status (COMPLETED,
/// DECLINED, PENDING) rather than assuming success. The transaction log write
/// is best effort and never fails the response.
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>> {
    let captured = state.gateway.capture_order(&order_id).await?;

    state.recorder.record(&captured).await;

    info!("Captured PayPal order {}", order_id);
    Ok(Json(captured))
}

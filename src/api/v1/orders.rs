//! Order lookup and search endpoints

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::order::Order;

/// Query parameters for order search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Email or free-text keyword; omitted means "list everything"
    pub q: Option<String>,
}

/// Response for order search
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

/// GET /v1/orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    debug!(order_id = %order_id, "Getting order");

    let order = state
        .order_store
        .get(&order_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Order '{}' not found", order_id)))?;

    Ok(Json(order))
}

/// GET /v1/orders?q=...
pub async fn search_orders(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<OrdersResponse>, ApiError> {
    debug!(query = ?params.q, "Searching orders");

    let orders = match params.q.as_deref() {
        Some(q) => state.order_store.search(q).await,
        None => state.order_store.list().await,
    }
    .map_err(ApiError::from)?;

    Ok(Json(OrdersResponse { orders }))
}

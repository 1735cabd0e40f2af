//! v1 API endpoints

pub mod classify;
pub mod orders;
pub mod reply;
pub mod triage;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::search_orders))
        .route("/orders/{order_id}", get(orders::get_order))
        .route("/classify", post(classify::classify_ticket))
        .route("/reply", post(reply::draft_reply))
        .route("/triage", post(triage::run_triage))
        .route("/triage/direct", post(triage::run_triage_direct))
}

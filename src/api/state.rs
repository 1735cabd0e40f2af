//! Application state for shared services

use std::sync::Arc;

use crate::domain::order::OrderStore;
use crate::domain::triage::TriagePipeline;

/// Application state shared across handlers
///
/// The order store is read-only after startup, so cloning the state is a
/// pair of `Arc` bumps.
#[derive(Debug, Clone)]
pub struct AppState {
    pub order_store: Arc<dyn OrderStore>,
    pub pipeline: TriagePipeline,
}

impl AppState {
    /// Create application state around an order store
    pub fn new(order_store: Arc<dyn OrderStore>) -> Self {
        let pipeline = TriagePipeline::new(order_store.clone());
        Self {
            order_store,
            pipeline,
        }
    }
}

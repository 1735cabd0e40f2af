//! Ticket Triage API
//!
//! Triages incoming customer-support tickets: extracts a referenced order
//! id, classifies the issue by keyword evidence, optionally fetches order
//! details, and drafts a canned reply with a recommendation for a human
//! agent. The core is a 4-stage pipeline (Ingest → Classify → Fetch Order →
//! Draft Reply) exposed over an HTTP API and an interactive chat CLI.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::order::InMemoryOrderStore;
use infrastructure::dataset;

/// Create the application state from configuration
///
/// Loads the order dataset (a JSON file when `data.orders_path` is set,
/// the built-in seed otherwise) and wires up the triage pipeline. All data
/// is immutable after this point.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let orders = match &config.data.orders_path {
        Some(path) => {
            info!("Loading orders from {:?}", path);
            dataset::load_orders_from_file(path)?
        }
        None => dataset::seed_orders(),
    };

    info!("Order dataset loaded: {} orders", orders.len());

    let store = Arc::new(InMemoryOrderStore::new(orders));
    Ok(AppState::new(store))
}

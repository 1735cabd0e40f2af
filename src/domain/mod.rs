//! Domain layer - core triage logic and entities

pub mod classifier;
pub mod error;
pub mod order;
pub mod reply;
pub mod triage;

pub use classifier::IssueType;
pub use error::DomainError;
pub use order::{InMemoryOrderStore, LineItem, Order, OrderStatus, OrderStore};
pub use triage::{TriageInput, TriageOutcome, TriagePipeline, TriageState};

//! Order domain - entity and read-only store

pub mod entity;
pub mod repository;

pub use entity::{LineItem, Order, OrderStatus};
pub use repository::in_memory::InMemoryOrderStore;
pub use repository::OrderStore;

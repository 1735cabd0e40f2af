//! Order store trait

use async_trait::async_trait;

use super::Order;
use crate::domain::DomainError;

/// Read-only store over the order dataset
///
/// The dataset is immutable within a process lifetime; implementations
/// never expose writes.
#[async_trait]
pub trait OrderStore: Send + Sync + std::fmt::Debug {
    /// Look up an order by its identifier
    async fn get(&self, order_id: &str) -> Result<Option<Order>, DomainError>;

    /// Search orders by customer email or free-text keyword
    async fn search(&self, query: &str) -> Result<Vec<Order>, DomainError>;

    /// Get all orders, in dataset order
    async fn list(&self) -> Result<Vec<Order>, DomainError>;
}

/// In-memory implementation of OrderStore
pub mod in_memory {
    use super::*;

    /// In-memory order store backed by the seed dataset
    ///
    /// Orders are stored in insertion order so search results are stable.
    #[derive(Debug, Default)]
    pub struct InMemoryOrderStore {
        orders: Vec<Order>,
    }

    impl InMemoryOrderStore {
        pub fn new(orders: Vec<Order>) -> Self {
            Self { orders }
        }

        pub fn is_empty(&self) -> bool {
            self.orders.is_empty()
        }

        pub fn len(&self) -> usize {
            self.orders.len()
        }
    }

    #[async_trait]
    impl OrderStore for InMemoryOrderStore {
        async fn get(&self, order_id: &str) -> Result<Option<Order>, DomainError> {
            Ok(self
                .orders
                .iter()
                .find(|o| o.order_id == order_id)
                .cloned())
        }

        async fn search(&self, query: &str) -> Result<Vec<Order>, DomainError> {
            Ok(self
                .orders
                .iter()
                .filter(|o| o.matches_query(query))
                .cloned()
                .collect())
        }

        async fn list(&self) -> Result<Vec<Order>, DomainError> {
            Ok(self.orders.clone())
        }
    }

}

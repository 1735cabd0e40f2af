//! Order entity - immutable records from the order dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfillment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Delayed,
    Returned,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Delayed => write!(f, "delayed"),
            Self::Returned => write!(f, "returned"),
        }
    }
}

/// A single purchased item within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
}

/// A customer order record
///
/// Orders are immutable for the lifetime of the dataset; the store hands
/// out clones and never mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (e.g. ORD1001)
    pub order_id: String,

    /// Customer's display name
    pub customer_name: String,

    /// Customer's email address
    pub email: String,

    /// Purchased items, in purchase order
    pub items: Vec<LineItem>,

    /// Current fulfillment status
    pub status: OrderStatus,

    /// Promised or actual delivery date
    pub delivery_date: NaiveDate,

    /// Order total in the store currency
    pub total_amount: f64,
}

impl Order {
    /// Case-insensitive match of a free-text query against the order's
    /// searchable fields: exact email, or substring of customer name,
    /// item names, or status.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return false;
        }

        if self.email.to_lowercase() == q {
            return true;
        }

        self.customer_name.to_lowercase().contains(&q)
            || self.status.to_string().contains(&q)
            || self.items.iter().any(|i| i.name.to_lowercase().contains(&q))
    }
}

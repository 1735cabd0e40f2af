//! Order dataset loading
//!
//! The store ships with a built-in seed dataset mirroring the mock orders
//! used by the chat front-end. A JSON file can replace it via
//! `data.orders_path` in the app configuration.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::order::{LineItem, Order, OrderStatus};
use crate::domain::DomainError;

/// Load orders from a JSON file (an array of order records)
pub fn load_orders_from_file(path: &Path) -> Result<Vec<Order>, DomainError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::configuration(format!("Failed to read orders file {:?}: {}", path, e))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        DomainError::configuration(format!("Failed to parse orders file {:?}: {}", path, e))
    })
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn item(name: &str, quantity: u32) -> LineItem {
    LineItem {
        name: name.to_string(),
        quantity,
    }
}

fn order(
    order_id: &str,
    customer_name: &str,
    email: &str,
    items: Vec<LineItem>,
    status: OrderStatus,
    delivery_date: NaiveDate,
    total_amount: f64,
) -> Order {
    Order {
        order_id: order_id.to_string(),
        customer_name: customer_name.to_string(),
        email: email.to_string(),
        items,
        status,
        delivery_date,
        total_amount,
    }
}

/// Built-in seed dataset
pub fn seed_orders() -> Vec<Order> {
    vec![
        order(
            "ORD1001",
            "Alice Johnson",
            "alice.johnson@example.com",
            vec![item("Wireless Headphones", 1), item("USB-C Cable", 2)],
            OrderStatus::Delivered,
            date(2024, 11, 2),
            109.97,
        ),
        order(
            "ORD1002",
            "Bob Smith",
            "bob.smith@example.com",
            vec![item("Mechanical Keyboard", 1)],
            OrderStatus::Delayed,
            date(2024, 11, 18),
            129.00,
        ),
        order(
            "ORD1003",
            "Carla Mendez",
            "carla.mendez@example.com",
            vec![item("Yoga Mat", 1), item("Water Bottle", 1)],
            OrderStatus::Shipped,
            date(2024, 11, 20),
            54.50,
        ),
        order(
            "ORD1004",
            "Miguel Alvarez",
            "miguel.alvarez@example.com",
            vec![item("Espresso Machine", 1)],
            OrderStatus::Delivered,
            date(2024, 10, 28),
            249.99,
        ),
        order(
            "ORD1005",
            "Dana White",
            "dana.white@example.com",
            vec![item("Running Shoes", 1)],
            OrderStatus::Processing,
            date(2024, 11, 25),
            89.95,
        ),
        order(
            "ORD1006",
            "Erik Larsen",
            "erik.larsen@example.com",
            vec![item("Desk Lamp", 1), item("Notebook Set", 3)],
            OrderStatus::Delivered,
            date(2024, 11, 5),
            62.40,
        ),
        order(
            "ORD1007",
            "Fatima Khan",
            "fatima.khan@example.com",
            vec![item("Bluetooth Speaker", 1)],
            OrderStatus::Returned,
            date(2024, 10, 15),
            79.99,
        ),
        order(
            "ORD1008",
            "George Okafor",
            "george.okafor@example.com",
            vec![item("Phone Case", 2), item("Screen Protector", 2)],
            OrderStatus::Shipped,
            date(2024, 11, 22),
            41.96,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_orders_have_unique_ids() {
        let orders = seed_orders();
        let mut ids: Vec<&str> = orders.iter().map(|o| o.order_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
    }

    #[test]
    fn test_seed_orders_ids_match_pattern() {
        for o in seed_orders() {
            assert!(o.order_id.starts_with("ORD"));
            assert_eq!(o.order_id.len(), 7);
            assert!(o.order_id[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_load_orders_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("triage_test_orders.json");
        let json = serde_json::to_string(&seed_orders()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_orders_from_file(&path).unwrap();
        assert_eq!(loaded.len(), seed_orders().len());
        assert_eq!(loaded[0].order_id, "ORD1001");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_orders_missing_file_is_configuration_error() {
        let result = load_orders_from_file(Path::new("/nonexistent/orders.json"));
        assert!(matches!(
            result,
            Err(DomainError::Configuration { .. })
        ));
    }
}

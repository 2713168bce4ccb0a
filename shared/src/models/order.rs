//! Order Models
//!
//! The order is the aggregate root: it owns its items, payments, tax lines
//! and tips (all append-only). Terminal orders are retained for history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
///
/// Forward path: OPEN → IN_PROGRESS → SERVED → CLOSED.
/// CANCELED is terminal and reachable only via an administrative path;
/// every transition guard still treats it as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    InProgress,
    Served,
    Closed,
    Canceled,
}

impl OrderStatus {
    /// Active statuses hold the table occupied
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress | Self::Served)
    }

    /// Terminal statuses reject every further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Canceled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Served => "SERVED",
            Self::Closed => "CLOSED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    DineIn,
    Takeout,
    Delivery,
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: String,
    pub branch_id: String,
    /// Null for takeout/delivery orders
    pub table_id: Option<String>,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// Unix millis
    pub opened_at: i64,
    /// Unix millis, set only when the order closes
    pub closed_at: Option<i64>,
}

/// Order line item
///
/// `price` is snapshotted at add time and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub menu_item_id: String,
    pub qty: i64,
    pub price: Decimal,
    pub notes: Option<String>,
}

/// Order line item joined with its menu item for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub id: String,
    pub menu_item_id: String,
    pub sku: String,
    pub name: String,
    pub qty: i64,
    pub price: Decimal,
    pub notes: Option<String>,
}

/// Payment record (append-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub order_id: String,
    pub method: PaymentMethod,
    pub amount: Decimal,
    pub created_at: i64,
}

/// Named tax amount attached to an order (append-only, opaque to the engine)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLine {
    pub id: String,
    pub order_id: String,
    pub name: String,
    pub amount: Decimal,
    pub created_at: i64,
}

/// Tax line as supplied by the caller alongside a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxLineInput {
    pub name: String,
    pub amount: Decimal,
}

/// Tip record (append-only, at most one per payment call)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub order_id: String,
    pub amount: Decimal,
    pub created_at: i64,
}

/// Full order view: the aggregate with all of its owned records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
    pub payments: Vec<Payment>,
    pub tax_lines: Vec<TaxLine>,
    pub tips: Vec<Tip>,
}

/// Kitchen display view of an active order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketView {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(OrderStatus::Open.is_active());
        assert!(OrderStatus::InProgress.is_active());
        assert!(OrderStatus::Served.is_active());
        assert!(!OrderStatus::Closed.is_active());
        assert!(OrderStatus::Closed.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::Served.is_terminal());
    }

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let back: OrderStatus = serde_json::from_str("\"CANCELED\"").unwrap();
        assert_eq!(back, OrderStatus::Canceled);
    }

    #[test]
    fn test_order_type_default() {
        assert_eq!(OrderType::default(), OrderType::DineIn);
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"DINE_IN\""
        );
    }

    #[test]
    fn test_order_serializes_type_field() {
        let order = Order {
            id: "o-1".into(),
            branch_id: "b-1".into(),
            table_id: None,
            order_type: OrderType::Takeout,
            status: OrderStatus::Open,
            opened_at: 1_700_000_000_000,
            closed_at: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "TAKEOUT");
        assert_eq!(json["status"], "OPEN");
    }
}

//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status
///
/// Owned by the backend; the client only displays the chain and
/// requests transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Cooking,
    Ready,
    Serving,
    Completed,
    Cancelled,
    NoShow,
}

impl OrderStatus {
    /// Next status in the forward chain, `None` for terminal states
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Serving),
            OrderStatus::Serving => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::NoShow => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Accepted => write!(f, "accepted"),
            OrderStatus::Cooking => write!(f, "cooking"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::Serving => write!(f, "serving"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// Order item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: i64,
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    pub quantity: i32,
}

/// Order entity (read-mostly projection of the backend order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub table_id: Option<i64>,
    pub table_number: Option<i32>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Total amount in minor currency units
    pub total_amount: i64,
    /// Tips amount in minor currency units
    #[serde(default)]
    pub tips_amount: i64,
    #[serde(default)]
    pub is_paid: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create order item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub dish_id: i64,
    pub quantity: i32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: i64,
    pub items: Vec<OrderItemCreate>,
}

/// Pay order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPay {
    /// Tip amount in minor currency units
    pub tips_amount: i64,
    pub payment_method: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain_reaches_completed() {
        let mut status = OrderStatus::Pending;
        let mut steps = 0;
        while let Some(next) = status.next() {
            status = next;
            steps += 1;
        }
        assert_eq!(status, OrderStatus::Completed);
        assert_eq!(steps, 5);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::NoShow.is_terminal());
        assert!(!OrderStatus::Cooking.is_terminal());
    }
}

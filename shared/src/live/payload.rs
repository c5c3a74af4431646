use serde::{Deserialize, Serialize};

use crate::models::{OrderStatus, Role};

/// Join payload (client -> server)
///
/// Carries the role so the server can route events to the right
/// subscriber set. Waiters also send their user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinPayload {
    pub role: Role,
    pub user_id: Option<i64>,
}

impl JoinPayload {
    pub fn guest() -> Self {
        Self {
            role: Role::Guest,
            user_id: None,
        }
    }

    pub fn user(role: Role, user_id: i64) -> Self {
        Self {
            role,
            user_id: Some(user_id),
        }
    }

    pub fn waiter(user_id: i64) -> Self {
        Self {
            role: Role::Waiter,
            user_id: Some(user_id),
        }
    }
}

/// Join acknowledgment payload (server -> client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinedPayload {
    pub role: Role,
}

/// Waiter call event payload (server -> waiters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiterCallEvent {
    pub table_id: i64,
    pub table_number: Option<i32>,
    pub message: Option<String>,
}

impl WaiterCallEvent {
    pub fn new(table_id: i64, table_number: Option<i32>, message: Option<String>) -> Self {
        Self {
            table_id,
            table_number,
            message,
        }
    }
}

/// New order event payload (server -> waiters)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderEvent {
    pub table_id: i64,
    pub order_id: i64,
}

impl NewOrderEvent {
    pub fn new(table_id: i64, order_id: i64) -> Self {
        Self { table_id, order_id }
    }
}

/// Order update event payload (server -> order owner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdateEvent {
    pub order_id: i64,
    pub status: OrderStatus,
}

impl OrderUpdateEvent {
    pub fn new(order_id: i64, status: OrderStatus) -> Self {
        Self { order_id, status }
    }
}

//! Waiter Call Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Waiter call status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiterCallStatus {
    Pending,
    InProgress,
    Resolved,
}

impl fmt::Display for WaiterCallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaiterCallStatus::Pending => write!(f, "pending"),
            WaiterCallStatus::InProgress => write!(f, "in_progress"),
            WaiterCallStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Waiter call entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiterCall {
    pub id: i64,
    pub table_id: i64,
    pub table_number: Option<i32>,
    pub message: Option<String>,
    pub status: WaiterCallStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Create waiter call payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiterCallCreate {
    pub message: Option<String>,
}

//! Dining Table Models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Available,
    Reserved,
    Occupied,
    Held,
    OutOfService,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStatus::Available => write!(f, "available"),
            TableStatus::Reserved => write!(f, "reserved"),
            TableStatus::Occupied => write!(f, "occupied"),
            TableStatus::Held => write!(f, "held"),
            TableStatus::OutOfService => write!(f, "out_of_service"),
        }
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub hall_id: i64,
    pub zone_id: Option<i64>,
    pub table_number: i32,
    pub capacity: i32,
    /// Opaque identifier embedded in the table's QR code/link
    pub short_code: Option<String>,
    #[serde(default)]
    pub is_vip: bool,
    pub status: TableStatus,
}

/// Client-side table context, resolved from a short code
///
/// Persisted under the `current_table` session key and kept until a
/// different table is scanned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableContext {
    pub table_id: i64,
    pub table_number: i32,
    pub capacity: i32,
    pub restaurant_id: i64,
    pub restaurant_name: Option<String>,
    pub short_code: String,
    #[serde(default)]
    pub is_vip: bool,
    pub status: TableStatus,
}

/// Update table status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

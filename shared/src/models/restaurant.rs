//! Restaurant, Hall and Zone Models

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// ISO 4217 currency code used for all prices
    pub currency: Option<String>,
}

/// Hall entity (a floor or room of a restaurant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
}

/// Zone entity (a seating area within a hall)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
}

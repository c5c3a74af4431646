//! Menu Models

use serde::{Deserialize, Serialize};

/// Dish entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Price in minor currency units
    pub price: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    /// Temporarily out of stock, shown greyed out
    #[serde(default)]
    pub on_stop_list: bool,
}

/// Menu category with embedded dishes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Price in minor currency units
    pub price: i64,
    pub image_url: Option<String>,
}

/// Update dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUpdate {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price in minor currency units
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub position: Option<i32>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub position: Option<i32>,
}

/// Stop-list toggle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopListUpdate {
    pub on_stop_list: bool,
}

//! Client-related types shared between backend and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Role;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login response (OAuth2 password flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub restaurant_id: Option<i64>,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
}

// =============================================================================
// Table link DTOs
// =============================================================================

/// QR link lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrLink {
    pub url: String,
}

/// Generated table link response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableLink {
    pub short_code: String,
    pub url: String,
}

// =============================================================================
// Analytics DTOs
// =============================================================================

/// Analytics overview (read-only projection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub orders_today: i64,
    /// Revenue in minor currency units
    pub revenue_today: i64,
    /// Average check in minor currency units
    pub average_check: i64,
    pub active_tables: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            username: "ab".to_string(),
            password: "short".to_string(),
            email: Some("not-an-email".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            username: "anna".to_string(),
            password: "secret123".to_string(),
            email: None,
        };

        assert!(request.validate().is_ok());
    }
}

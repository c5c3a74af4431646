//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Reservation status
///
/// Owned by the backend; the client requests transitions, never
/// computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Draft,
    Pending,
    Confirmed,
    Awaiting,
    CheckedIn,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationStatus::Draft => write!(f, "draft"),
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Awaiting => write!(f, "awaiting"),
            ReservationStatus::CheckedIn => write!(f, "checked_in"),
            ReservationStatus::Seated => write!(f, "seated"),
            ReservationStatus::Completed => write!(f, "completed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
            ReservationStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub restaurant_id: i64,
    pub guest_name: String,
    pub guest_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: i32,
    pub zone_id: Option<i64>,
    pub table_id: Option<i64>,
    pub status: ReservationStatus,
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    pub restaurant_id: i64,
    #[validate(length(min = 1, message = "guest name is required"))]
    pub guest_name: String,
    #[validate(length(min = 5, message = "guest phone is required"))]
    pub guest_phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[validate(range(min = 1, max = 50, message = "party size must be between 1 and 50"))]
    pub party_size: i32,
    pub zone_id: Option<i64>,
    pub table_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_create_validation() {
        let payload = ReservationCreate {
            restaurant_id: 1,
            guest_name: String::new(),
            guest_phone: "123".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            party_size: 0,
            zone_id: None,
            table_id: None,
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("guest_name"));
        assert!(errors.field_errors().contains_key("guest_phone"));
        assert!(errors.field_errors().contains_key("party_size"));
    }
}

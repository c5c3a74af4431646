//! User Role Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role
///
/// Closed set; navigation matches on it exhaustively. `Guest` is a
/// client-side state (no account), the rest come from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    User,
    Waiter,
    Admin,
    Moderator,
    Owner,
}

impl Role {
    /// Staff roles get dashboard access
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Role::Waiter | Role::Admin | Role::Moderator | Role::Owner
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => write!(f, "guest"),
            Role::User => write!(f, "user"),
            Role::Waiter => write!(f, "waiter"),
            Role::Admin => write!(f, "admin"),
            Role::Moderator => write!(f, "moderator"),
            Role::Owner => write!(f, "owner"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Waiter).unwrap();
        assert_eq!(json, "\"waiter\"");

        let role: Role = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, Role::Owner);
    }

    #[test]
    fn test_staff_roles() {
        assert!(Role::Waiter.is_staff());
        assert!(Role::Owner.is_staff());
        assert!(!Role::Guest.is_staff());
        assert!(!Role::User.is_staff());
    }
}

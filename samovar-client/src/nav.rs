//! Role-gated navigation
//!
//! Client-side route admission: protected routes require a stored token,
//! and waiters landing on the general dashboard are dispatched to their
//! own view. Role branching here is presentation only; authorization is
//! enforced by the server.

use std::fmt;

use crate::session::SessionStore;
use shared::models::Role;

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    TableScan,
    Menu,
    Check,
    Checkout,
    MyOrders,
    Dashboard,
    Waiter,
    Reservations,
    Admin,
}

impl Route {
    /// Whether the route requires an authenticated session
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::Register | Route::TableScan | Route::Menu | Route::Check
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Login => "login",
            Route::Register => "register",
            Route::TableScan => "table-scan",
            Route::Menu => "menu",
            Route::Check => "check",
            Route::Checkout => "checkout",
            Route::MyOrders => "my-orders",
            Route::Dashboard => "dashboard",
            Route::Waiter => "waiter",
            Route::Reservations => "reservations",
            Route::Admin => "admin",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    RedirectLogin,
    /// Waiter landed on the general dashboard
    RedirectWaiter,
}

/// Decide whether a route may be entered with the current session
pub fn guard(route: Route, session: &SessionStore) -> NavDecision {
    if route.is_protected() && session.token().is_none() {
        tracing::debug!(route = %route, "No token, redirecting to login");
        return NavDecision::RedirectLogin;
    }

    if route == Route::Dashboard {
        if let Some(user) = session.current_user() {
            if user.role == Role::Waiter {
                tracing::debug!("Waiter on dashboard, dispatching to waiter view");
                return NavDecision::RedirectWaiter;
            }
        }
    }

    NavDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::client::UserInfo;

    fn store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        (dir, store)
    }

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: 1,
            username: "anna".to_string(),
            role,
            restaurant_id: Some(9),
        }
    }

    #[test]
    fn test_protected_route_without_token_redirects() {
        let (_dir, store) = store();
        assert_eq!(guard(Route::Dashboard, &store), NavDecision::RedirectLogin);
        assert_eq!(guard(Route::Checkout, &store), NavDecision::RedirectLogin);
        assert_eq!(guard(Route::MyOrders, &store), NavDecision::RedirectLogin);
    }

    #[test]
    fn test_public_routes_always_allowed() {
        let (_dir, store) = store();
        assert_eq!(guard(Route::Login, &store), NavDecision::Allow);
        assert_eq!(guard(Route::Menu, &store), NavDecision::Allow);
        assert_eq!(guard(Route::TableScan, &store), NavDecision::Allow);
        assert_eq!(guard(Route::Check, &store), NavDecision::Allow);
    }

    #[test]
    fn test_protected_route_with_token_allowed() {
        let (_dir, mut store) = store();
        store.set_token("tok").unwrap();
        store.set_current_user(&user(Role::User)).unwrap();

        assert_eq!(guard(Route::Dashboard, &store), NavDecision::Allow);
        assert_eq!(guard(Route::Checkout, &store), NavDecision::Allow);
    }

    #[test]
    fn test_waiter_dispatched_from_dashboard() {
        let (_dir, mut store) = store();
        store.set_token("tok").unwrap();
        store.set_current_user(&user(Role::Waiter)).unwrap();

        assert_eq!(guard(Route::Dashboard, &store), NavDecision::RedirectWaiter);
        // Only the dashboard dispatches; other routes stay open
        assert_eq!(guard(Route::Waiter, &store), NavDecision::Allow);
        assert_eq!(guard(Route::MyOrders, &store), NavDecision::Allow);
    }
}

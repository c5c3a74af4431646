//! Data models
//!
//! Shared between the client library and frontends (via API).
//! All IDs are `i64`. Money amounts are `i64` minor currency units.

pub mod menu;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod role;
pub mod table;
pub mod waiter_call;

// Re-exports
pub use menu::*;
pub use order::*;
pub use reservation::*;
pub use restaurant::*;
pub use role::*;
pub use table::*;
pub use waiter_call::*;

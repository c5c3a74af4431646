//! Shared types for the Samovar client workspace
//!
//! Domain models, API DTOs, and live-channel message types used by
//! the client library and the application frontends.

pub mod client;
pub mod live;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Live channel re-exports (for convenient access)
pub use live::{EventType, LiveMessage};

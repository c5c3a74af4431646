//! Live notification bridge
//!
//! Reconnecting event-channel client: joins with the current role on
//! connect, forwards waiter-call and order events to subscribers, and
//! exposes a connection-state indicator for the UI.

mod bridge;
mod transport;

pub use bridge::{LiveBridge, Subscription};
pub use transport::{LiveTransport, MemoryTransport, TcpTransport};

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Live channel error type
#[derive(Debug, Error)]
pub enum LiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
}

/// Connection lifecycle state
///
/// Exposed to the UI as a non-blocking indicator only; disconnects are
/// never surfaced as errors to views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Disconnected => write!(f, "disconnected"),
            ConnectionState::Connecting => write!(f, "connecting"),
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Closed => write!(f, "closed"),
        }
    }
}

/// Live bridge configuration
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// Whether to reconnect after a dropped connection
    pub auto_reconnect: bool,
    /// Initial reconnect delay
    pub reconnect_delay: Duration,
    /// Reconnect delay cap (exponential backoff)
    pub max_reconnect_delay: Duration,
    /// Maximum reconnect attempts (0 means unlimited)
    pub max_reconnect_attempts: u32,
}

impl Default for LiveConfig {
    /// LAN-oriented defaults: fast detection, fast recovery
    fn default() -> Self {
        Self {
            auto_reconnect: true,
            reconnect_delay: Duration::from_millis(500),
            max_reconnect_delay: Duration::from_secs(10),
            max_reconnect_attempts: 20,
        }
    }
}

impl LiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Internet configuration: tolerate latency, back off further
    pub fn wan() -> Self {
        Self {
            auto_reconnect: true,
            reconnect_delay: Duration::from_secs(1),
            max_reconnect_delay: Duration::from_secs(60),
            max_reconnect_attempts: 20,
        }
    }

    pub fn with_auto_reconnect(mut self, enabled: bool) -> Self {
        self.auto_reconnect = enabled;
        self
    }

    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn with_max_reconnect_attempts(mut self, attempts: u32) -> Self {
        self.max_reconnect_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LiveConfig::default();
        assert!(config.auto_reconnect);
        assert_eq!(config.reconnect_delay, Duration::from_millis(500));
        assert_eq!(config.max_reconnect_attempts, 20);
    }

    #[test]
    fn test_config_builder() {
        let config = LiveConfig::new()
            .with_auto_reconnect(false)
            .with_max_reconnect_attempts(3);

        assert!(!config.auto_reconnect);
        assert_eq!(config.max_reconnect_attempts, 3);
    }
}

use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use crate::live::transport::{LiveTransport, MemoryTransport, TcpTransport};
use crate::live::{ConnectionState, LiveConfig, LiveError};
use shared::live::{EventType, JoinPayload, LiveMessage};

/// Live Notification Bridge
///
/// Owns one background read task. On connect it sends a join message
/// carrying the current role so the server can route events; received
/// events fan out to all live subscriptions in delivery order, without
/// deduplication. Listeners handle redelivery after a reconnect
/// idempotently. Dropped connections reconnect with capped exponential
/// backoff; `close` tears the bridge down immediately.
#[derive(Debug, Clone)]
pub struct LiveBridge {
    event_tx: broadcast::Sender<LiveMessage>,
    state_tx: Arc<watch::Sender<ConnectionState>>,
    state_rx: watch::Receiver<ConnectionState>,
    cancel: CancellationToken,
}

#[derive(Debug, Clone)]
enum BridgeTransport {
    Tcp(TcpTransport),
    Memory(MemoryTransport),
}

impl BridgeTransport {
    async fn read_message(&self) -> Result<LiveMessage, LiveError> {
        match self {
            BridgeTransport::Tcp(t) => t.read_message().await,
            BridgeTransport::Memory(t) => t.read_message().await,
        }
    }

    async fn write_message(&self, msg: &LiveMessage) -> Result<(), LiveError> {
        match self {
            BridgeTransport::Tcp(t) => t.write_message(msg).await,
            BridgeTransport::Memory(t) => t.write_message(msg).await,
        }
    }
}

/// Parameters for re-establishing a dropped TCP connection
#[derive(Debug, Clone)]
struct ReconnectPolicy {
    addr: String,
    join: JoinPayload,
    config: LiveConfig,
}

impl LiveBridge {
    /// Connect via TCP and join with the given role
    pub async fn connect(
        addr: &str,
        join: JoinPayload,
        config: LiveConfig,
    ) -> Result<Self, LiveError> {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
        let state_tx = Arc::new(state_tx);

        let transport = BridgeTransport::Tcp(TcpTransport::connect(addr).await?);
        transport.write_message(&LiveMessage::join(&join)).await?;
        let _ = state_tx.send(ConnectionState::Connected);
        tracing::info!(addr = %addr, role = %join.role, "Live channel connected");

        let policy = ReconnectPolicy {
            addr: addr.to_string(),
            join,
            config,
        };
        Ok(Self::spawn(transport, Some(policy), state_tx, state_rx))
    }

    /// Create an in-process bridge over broadcast channels
    ///
    /// # Arguments
    /// * `server_tx` - the server's broadcast sender (subscribed for pushes)
    /// * `client_to_server_tx` - the channel carrying messages to the server
    pub async fn memory(
        server_tx: &broadcast::Sender<LiveMessage>,
        client_to_server_tx: &broadcast::Sender<LiveMessage>,
        join: JoinPayload,
    ) -> Result<Self, LiveError> {
        let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);
        let state_tx = Arc::new(state_tx);

        let transport = BridgeTransport::Memory(MemoryTransport::new(server_tx, client_to_server_tx));
        transport.write_message(&LiveMessage::join(&join)).await?;
        let _ = state_tx.send(ConnectionState::Connected);

        Ok(Self::spawn(transport, None, state_tx, state_rx))
    }

    fn spawn(
        transport: BridgeTransport,
        reconnect: Option<ReconnectPolicy>,
        state_tx: Arc<watch::Sender<ConnectionState>>,
        state_rx: watch::Receiver<ConnectionState>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(1024);
        let cancel = CancellationToken::new();

        let bridge = Self {
            event_tx: event_tx.clone(),
            state_tx: state_tx.clone(),
            state_rx,
            cancel: cancel.clone(),
        };

        tokio::spawn(run(transport, reconnect, event_tx, state_tx, cancel));

        bridge
    }

    /// Subscribe to one event type
    ///
    /// Dropping the returned subscription unsubscribes it.
    pub fn subscribe(&self, event_type: EventType) -> Subscription {
        Subscription {
            rx: self.event_tx.subscribe(),
            filter: event_type,
            cancel: self.cancel.clone(),
        }
    }

    /// Watch the connection state (non-blocking UI indicator)
    pub fn state(&self) -> watch::Receiver<ConnectionState> {
        self.state_rx.clone()
    }

    /// Current connection state
    pub fn current_state(&self) -> ConnectionState {
        *self.state_rx.borrow()
    }

    /// Tear down the bridge immediately
    ///
    /// No further events are delivered after this returns; buffered
    /// events are dropped, not replayed.
    pub fn close(&self) {
        self.cancel.cancel();
        let _ = self.state_tx.send(ConnectionState::Closed);
        tracing::info!("Live bridge closed");
    }
}

/// Subscription to a single event type
///
/// Wraps a broadcast receiver; events arrive in delivery order,
/// at most once each.
pub struct Subscription {
    rx: broadcast::Receiver<LiveMessage>,
    filter: EventType,
    cancel: CancellationToken,
}

impl Subscription {
    /// Receive the next matching event
    ///
    /// Returns `None` once the bridge is closed.
    pub async fn recv(&mut self) -> Option<LiveMessage> {
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => return None,
                result = self.rx.recv() => match result {
                    Ok(msg) if msg.event_type == self.filter => return Some(msg),
                    Ok(_) => continue,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Subscription lagged, events dropped");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                },
            }
        }
    }
}

async fn run(
    mut transport: BridgeTransport,
    reconnect: Option<ReconnectPolicy>,
    event_tx: broadcast::Sender<LiveMessage>,
    state_tx: Arc<watch::Sender<ConnectionState>>,
    cancel: CancellationToken,
) {
    loop {
        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = transport.read_message() => result,
        };

        match result {
            Ok(msg) => {
                tracing::debug!(event = %msg.event_type, "Live event received");
                if let Err(e) = event_tx.send(msg) {
                    tracing::debug!("No subscribers for event: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Live channel read failed");
                let _ = state_tx.send(ConnectionState::Disconnected);

                let Some(policy) = reconnect.as_ref() else {
                    break;
                };
                if !policy.config.auto_reconnect {
                    break;
                }

                match reconnect_loop(policy, &state_tx, &cancel).await {
                    Some(restored) => {
                        transport = restored;
                        let _ = state_tx.send(ConnectionState::Connected);
                    }
                    None => break,
                }
            }
        }
    }
}

/// Try to re-establish the connection with capped exponential backoff
///
/// Returns `None` when cancelled or out of attempts.
async fn reconnect_loop(
    policy: &ReconnectPolicy,
    state_tx: &watch::Sender<ConnectionState>,
    cancel: &CancellationToken,
) -> Option<BridgeTransport> {
    let mut delay = policy.config.reconnect_delay;
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        if policy.config.max_reconnect_attempts > 0
            && attempts > policy.config.max_reconnect_attempts
        {
            tracing::error!(
                attempts = attempts - 1,
                "Giving up on live channel reconnect"
            );
            return None;
        }

        tokio::select! {
            _ = cancel.cancelled() => return None,
            _ = tokio::time::sleep(delay) => {}
        }

        let _ = state_tx.send(ConnectionState::Connecting);
        match TcpTransport::connect(&policy.addr).await {
            Ok(transport) => {
                let transport = BridgeTransport::Tcp(transport);
                match transport.write_message(&LiveMessage::join(&policy.join)).await {
                    Ok(()) => {
                        tracing::info!(attempt = attempts, "Live channel reconnected");
                        return Some(transport);
                    }
                    Err(e) => tracing::warn!(error = %e, "Join after reconnect failed"),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, attempt = attempts, "Reconnect attempt failed");
            }
        }

        let _ = state_tx.send(ConnectionState::Disconnected);
        delay = (delay * 2).min(policy.config.max_reconnect_delay);
    }
}

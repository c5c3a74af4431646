use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

use crate::live::LiveError;
use shared::live::{EventType, LiveMessage};

/// Transport abstraction for the live channel
#[async_trait]
pub trait LiveTransport: Send + Sync + std::fmt::Debug {
    async fn read_message(&self) -> Result<LiveMessage, LiveError>;
    async fn write_message(&self, msg: &LiveMessage) -> Result<(), LiveError>;
    async fn close(&self) -> Result<(), LiveError>;
}

/// TCP transport
///
/// Frame layout: 1 byte event type, 16 bytes request id, 4 bytes LE
/// payload length, JSON payload.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> Result<Self, LiveError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| LiveError::Connection(e.to_string()))?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
            writer: Arc::new(Mutex::new(writer)),
        })
    }
}

#[async_trait]
impl LiveTransport for TcpTransport {
    async fn read_message(&self) -> Result<LiveMessage, LiveError> {
        let mut reader = self.reader.lock().await;

        // Read event type (1 byte)
        let mut type_buf = [0u8; 1];
        reader.read_exact(&mut type_buf).await.map_err(LiveError::Io)?;

        let event_type = EventType::try_from(type_buf[0])
            .map_err(|_| LiveError::InvalidFrame("Invalid event type".into()))?;

        // Read request id (16 bytes)
        let mut uuid_buf = [0u8; 16];
        reader.read_exact(&mut uuid_buf).await.map_err(LiveError::Io)?;
        let request_id = Uuid::from_bytes(uuid_buf);

        // Read payload length (4 bytes)
        let mut len_buf = [0u8; 4];
        reader.read_exact(&mut len_buf).await.map_err(LiveError::Io)?;
        let len = u32::from_le_bytes(len_buf) as usize;

        // Read payload
        let mut payload = vec![0u8; len];
        reader.read_exact(&mut payload).await.map_err(LiveError::Io)?;

        Ok(LiveMessage {
            request_id,
            event_type,
            payload,
        })
    }

    async fn write_message(&self, msg: &LiveMessage) -> Result<(), LiveError> {
        let mut writer = self.writer.lock().await;
        let mut data = Vec::new();
        data.push(msg.event_type as u8);
        data.extend_from_slice(msg.request_id.as_bytes());
        data.extend_from_slice(&(msg.payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&msg.payload);

        writer.write_all(&data).await.map_err(LiveError::Io)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), LiveError> {
        // Dropping the halves closes the stream
        Ok(())
    }
}

/// Memory transport (for in-process servers and tests)
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    /// Receiver for messages FROM the server
    rx: Arc<Mutex<broadcast::Receiver<LiveMessage>>>,
    /// Sender for messages TO the server
    tx: broadcast::Sender<LiveMessage>,
}

impl MemoryTransport {
    /// Create a new memory transport
    ///
    /// # Arguments
    /// * `server_tx` - the server's broadcast sender (subscribed for pushes)
    /// * `client_to_server_tx` - the channel carrying messages to the server
    pub fn new(
        server_tx: &broadcast::Sender<LiveMessage>,
        client_to_server_tx: &broadcast::Sender<LiveMessage>,
    ) -> Self {
        Self {
            rx: Arc::new(Mutex::new(server_tx.subscribe())),
            tx: client_to_server_tx.clone(),
        }
    }
}

#[async_trait]
impl LiveTransport for MemoryTransport {
    async fn read_message(&self) -> Result<LiveMessage, LiveError> {
        let mut rx = self.rx.lock().await;
        rx.recv()
            .await
            .map_err(|e| LiveError::Connection(format!("Memory channel error: {}", e)))
    }

    async fn write_message(&self, msg: &LiveMessage) -> Result<(), LiveError> {
        self.tx
            .send(msg.clone())
            .map_err(|e| LiveError::Connection(format!("Failed to send to server: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), LiveError> {
        Ok(())
    }
}

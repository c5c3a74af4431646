//! Live channel message types
//!
//! Shared between the notification bridge and in-process test servers,
//! for in-memory and network (TCP) delivery.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use uuid::Uuid;

pub mod payload;
pub use payload::*;

/// Live channel event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Room join (client -> server, carries role)
    Join = 0,
    /// Join acknowledgment (server -> client)
    Joined = 1,
    /// A table requested staff attention
    WaiterCall = 2,
    /// A new order was placed
    NewOrder = 3,
    /// An order changed status
    OrderUpdate = 4,
}

impl TryFrom<u8> for EventType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Join),
            1 => Ok(EventType::Joined),
            2 => Ok(EventType::WaiterCall),
            3 => Ok(EventType::NewOrder),
            4 => Ok(EventType::OrderUpdate),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Join => write!(f, "join"),
            EventType::Joined => write!(f, "joined"),
            EventType::WaiterCall => write!(f, "waiter_call"),
            EventType::NewOrder => write!(f, "new_order"),
            EventType::OrderUpdate => write!(f, "order_update"),
        }
    }
}

/// Live channel message body
///
/// Framed on the wire as: 1 byte event type, 16 bytes request id,
/// 4 bytes LE payload length, JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMessage {
    pub request_id: Uuid,
    pub event_type: EventType,
    pub payload: Vec<u8>,
}

impl LiveMessage {
    pub fn new(event_type: EventType, payload: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            event_type,
            payload,
        }
    }

    /// Create a join message
    pub fn join(payload: &JoinPayload) -> Self {
        Self::new(
            EventType::Join,
            serde_json::to_vec(payload).expect("Failed to serialize join payload"),
        )
    }

    /// Create a waiter call event
    pub fn waiter_call(payload: &WaiterCallEvent) -> Self {
        Self::new(
            EventType::WaiterCall,
            serde_json::to_vec(payload).expect("Failed to serialize waiter call event"),
        )
    }

    /// Create a new order event
    pub fn new_order(payload: &NewOrderEvent) -> Self {
        Self::new(
            EventType::NewOrder,
            serde_json::to_vec(payload).expect("Failed to serialize new order event"),
        )
    }

    /// Create an order update event
    pub fn order_update(payload: &OrderUpdateEvent) -> Self {
        Self::new(
            EventType::OrderUpdate,
            serde_json::to_vec(payload).expect("Failed to serialize order update event"),
        )
    }

    /// Parse the payload into the given type
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_event_type_round_trip() {
        for raw in 0..=4u8 {
            let event_type = EventType::try_from(raw).unwrap();
            assert_eq!(event_type as u8, raw);
        }
        assert!(EventType::try_from(5).is_err());
    }

    #[test]
    fn test_join_message() {
        let payload = JoinPayload::waiter(7);
        let msg = LiveMessage::join(&payload);
        assert_eq!(msg.event_type, EventType::Join);
        assert!(!msg.request_id.is_nil());

        let parsed: JoinPayload = msg.parse_payload().unwrap();
        assert_eq!(parsed.role, Role::Waiter);
        assert_eq!(parsed.user_id, Some(7));
    }

    #[test]
    fn test_waiter_call_event() {
        let event = WaiterCallEvent::new(5, Some(5), Some("water please".to_string()));
        let msg = LiveMessage::waiter_call(&event);

        let parsed: WaiterCallEvent = msg.parse_payload().unwrap();
        assert_eq!(parsed.table_id, 5);
        assert_eq!(parsed.message.as_deref(), Some("water please"));
    }
}

use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::timeout;

use samovar_client::live::{ConnectionState, LiveBridge};
use shared::live::{EventType, JoinPayload, LiveMessage, NewOrderEvent, WaiterCallEvent};
use shared::models::Role;

const RECV_TIMEOUT: Duration = Duration::from_secs(1);
const SILENCE: Duration = Duration::from_millis(200);

fn channels() -> (
    broadcast::Sender<LiveMessage>,
    broadcast::Sender<LiveMessage>,
) {
    let (server_tx, _) = broadcast::channel(64);
    let (client_to_server_tx, _) = broadcast::channel(64);
    (server_tx, client_to_server_tx)
}

#[tokio::test]
async fn test_join_sent_on_connect() {
    let (server_tx, client_to_server_tx) = channels();
    let mut server_rx = client_to_server_tx.subscribe();

    let bridge = LiveBridge::memory(&server_tx, &client_to_server_tx, JoinPayload::waiter(7))
        .await
        .unwrap();

    let msg = timeout(RECV_TIMEOUT, server_rx.recv())
        .await
        .expect("no join frame")
        .unwrap();
    assert_eq!(msg.event_type, EventType::Join);

    let join: JoinPayload = msg.parse_payload().unwrap();
    assert_eq!(join.role, Role::Waiter);
    assert_eq!(join.user_id, Some(7));

    assert_eq!(bridge.current_state(), ConnectionState::Connected);
    bridge.close();
}

#[tokio::test]
async fn test_waiter_call_delivered_exactly_once() {
    let (server_tx, client_to_server_tx) = channels();
    let bridge = LiveBridge::memory(&server_tx, &client_to_server_tx, JoinPayload::waiter(7))
        .await
        .unwrap();
    let mut calls = bridge.subscribe(EventType::WaiterCall);

    let event = WaiterCallEvent::new(5, Some(5), Some("water please".to_string()));
    server_tx.send(LiveMessage::waiter_call(&event)).unwrap();

    let msg = timeout(RECV_TIMEOUT, calls.recv())
        .await
        .expect("event not delivered")
        .expect("bridge closed early");
    let received: WaiterCallEvent = msg.parse_payload().unwrap();
    assert_eq!(received.table_id, 5);
    assert_eq!(received.message.as_deref(), Some("water please"));

    // One event in, one delivery out
    assert!(timeout(SILENCE, calls.recv()).await.is_err());
    bridge.close();
}

#[tokio::test]
async fn test_every_subscription_sees_the_event() {
    let (server_tx, client_to_server_tx) = channels();
    let bridge = LiveBridge::memory(&server_tx, &client_to_server_tx, JoinPayload::waiter(7))
        .await
        .unwrap();
    let mut first = bridge.subscribe(EventType::WaiterCall);
    let mut second = bridge.subscribe(EventType::WaiterCall);

    let event = WaiterCallEvent::new(3, None, None);
    server_tx.send(LiveMessage::waiter_call(&event)).unwrap();

    for sub in [&mut first, &mut second] {
        let msg = timeout(RECV_TIMEOUT, sub.recv())
            .await
            .expect("event not delivered")
            .expect("bridge closed early");
        assert_eq!(msg.event_type, EventType::WaiterCall);
    }
    bridge.close();
}

#[tokio::test]
async fn test_subscription_filters_by_event_type() {
    let (server_tx, client_to_server_tx) = channels();
    let bridge = LiveBridge::memory(&server_tx, &client_to_server_tx, JoinPayload::waiter(7))
        .await
        .unwrap();
    let mut calls = bridge.subscribe(EventType::WaiterCall);
    let mut orders = bridge.subscribe(EventType::NewOrder);

    server_tx
        .send(LiveMessage::new_order(&NewOrderEvent::new(5, 42)))
        .unwrap();

    let msg = timeout(RECV_TIMEOUT, orders.recv())
        .await
        .expect("event not delivered")
        .expect("bridge closed early");
    let received: NewOrderEvent = msg.parse_payload().unwrap();
    assert_eq!(received.order_id, 42);

    // The call subscription never sees order events
    assert!(timeout(SILENCE, calls.recv()).await.is_err());
    bridge.close();
}

#[tokio::test]
async fn test_no_delivery_after_close() {
    let (server_tx, client_to_server_tx) = channels();
    let bridge = LiveBridge::memory(&server_tx, &client_to_server_tx, JoinPayload::guest())
        .await
        .unwrap();
    let mut calls = bridge.subscribe(EventType::WaiterCall);

    bridge.close();
    assert_eq!(bridge.current_state(), ConnectionState::Closed);

    let event = WaiterCallEvent::new(5, Some(5), None);
    let _ = server_tx.send(LiveMessage::waiter_call(&event));

    assert!(
        timeout(RECV_TIMEOUT, calls.recv())
            .await
            .expect("recv should resolve after close")
            .is_none()
    );
}

#[tokio::test]
async fn test_state_watch_reports_connected() {
    let (server_tx, client_to_server_tx) = channels();
    let bridge = LiveBridge::memory(
        &server_tx,
        &client_to_server_tx,
        JoinPayload::user(Role::User, 12),
    )
    .await
    .unwrap();

    let state = bridge.state();
    assert_eq!(*state.borrow(), ConnectionState::Connected);

    bridge.close();
    let mut state = bridge.state();
    timeout(RECV_TIMEOUT, state.wait_for(|s| *s == ConnectionState::Closed))
        .await
        .expect("state never reached closed")
        .unwrap();
}

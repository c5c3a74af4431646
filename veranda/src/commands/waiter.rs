//! Waiter workflows: call queue, order queue, live listening

use anyhow::bail;

use crate::cli::WaiterCommand;
use crate::commands::format_money;
use crate::context::AppContext;
use samovar_client::{LiveBridge, LiveConfig};
use shared::live::{EventType, JoinPayload, NewOrderEvent, OrderUpdateEvent, WaiterCallEvent};
use shared::models::{Role, WaiterCallStatus};

pub async fn dispatch(ctx: &mut AppContext, command: WaiterCommand) -> anyhow::Result<()> {
    match command {
        WaiterCommand::Calls => calls(ctx).await,
        WaiterCommand::Resolve { call_id } => resolve(ctx, call_id).await,
        WaiterCommand::Orders => orders(ctx).await,
        WaiterCommand::Listen => listen(ctx).await,
    }
}

async fn calls(ctx: &mut AppContext) -> anyhow::Result<()> {
    let calls = ctx.api.waiter_calls().await?;
    let pending: Vec<_> = calls
        .iter()
        .filter(|c| c.status != WaiterCallStatus::Resolved)
        .collect();
    if pending.is_empty() {
        println!("No open waiter calls");
        return Ok(());
    }
    for call in pending {
        let table = call
            .table_number
            .map(|n| format!("table {}", n))
            .unwrap_or_else(|| format!("table id {}", call.table_id));
        let message = call.message.as_deref().unwrap_or("-");
        println!("  [{}] {} ({}): {}", call.id, table, call.status, message);
    }
    Ok(())
}

async fn resolve(ctx: &mut AppContext, call_id: i64) -> anyhow::Result<()> {
    let call = ctx.api.resolve_waiter_call(call_id).await?;
    println!("Call #{} resolved", call.id);
    Ok(())
}

async fn orders(ctx: &mut AppContext) -> anyhow::Result<()> {
    let orders = ctx.api.waiter_orders().await?;
    if orders.is_empty() {
        println!("No active orders");
        return Ok(());
    }
    for order in &orders {
        let table = order
            .table_number
            .map(|n| format!("table {}", n))
            .unwrap_or_else(|| "no table".to_string());
        let hint = order
            .status
            .next()
            .map(|next| format!("  -> {}", next))
            .unwrap_or_default();
        println!(
            "  #{} {} {} {}{}",
            order.id,
            table,
            order.status,
            format_money(order.total_amount),
            hint
        );
    }
    Ok(())
}

/// Follow live events until Ctrl-C
///
/// Joins as the logged-in waiter so the server routes waiter-room
/// events here. Reconnects happen inside the bridge; this loop only
/// renders events and the connection indicator.
async fn listen(ctx: &mut AppContext) -> anyhow::Result<()> {
    let addr = ctx.live_addr()?.to_string();
    let join = match ctx.current_user() {
        Some(user) if user.role == Role::Waiter => JoinPayload::waiter(user.id),
        Some(user) if user.role.is_staff() => JoinPayload::user(user.role, user.id),
        Some(_) | None => bail!("Listening requires a staff login"),
    };

    let bridge = LiveBridge::connect(&addr, join, LiveConfig::default()).await?;
    let mut state = bridge.state();
    let mut calls = bridge.subscribe(EventType::WaiterCall);
    let mut new_orders = bridge.subscribe(EventType::NewOrder);
    let mut updates = bridge.subscribe(EventType::OrderUpdate);

    println!("Listening for events. Ctrl-C to stop.");
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("[{}]", *state.borrow());
            }
            Some(msg) = calls.recv() => {
                match msg.parse_payload::<WaiterCallEvent>() {
                    Ok(event) => {
                        let table = event
                            .table_number
                            .map(|n| format!("table {}", n))
                            .unwrap_or_else(|| format!("table id {}", event.table_id));
                        let message = event.message.as_deref().unwrap_or("-");
                        println!("Waiter call: {} ({})", table, message);
                    }
                    Err(e) => tracing::warn!(error = %e, "Bad waiter call payload"),
                }
            }
            Some(msg) = new_orders.recv() => {
                match msg.parse_payload::<NewOrderEvent>() {
                    Ok(event) => println!(
                        "New order #{} for table id {}",
                        event.order_id, event.table_id
                    ),
                    Err(e) => tracing::warn!(error = %e, "Bad new order payload"),
                }
            }
            Some(msg) = updates.recv() => {
                match msg.parse_payload::<OrderUpdateEvent>() {
                    Ok(event) => println!("Order #{} is now {}", event.order_id, event.status),
                    Err(e) => tracing::warn!(error = %e, "Bad order update payload"),
                }
            }
            else => break,
        }
    }

    bridge.close();
    println!("Stopped");
    Ok(())
}

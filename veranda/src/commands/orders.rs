//! Order queries and status updates

use anyhow::bail;

use crate::cli::OrdersCommand;
use crate::commands::print_order;
use crate::context::AppContext;
use shared::models::OrderStatus;

pub async fn dispatch(ctx: &mut AppContext, command: OrdersCommand) -> anyhow::Result<()> {
    match command {
        OrdersCommand::My => my(ctx).await,
        OrdersCommand::Current => current(ctx).await,
        OrdersCommand::SetStatus { order_id, status } => set_status(ctx, order_id, &status).await,
    }
}

async fn my(ctx: &mut AppContext) -> anyhow::Result<()> {
    let orders = ctx.api.my_orders().await?;
    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }
    for order in &orders {
        print_order(order);
    }
    Ok(())
}

async fn current(ctx: &mut AppContext) -> anyhow::Result<()> {
    let table = ctx.require_table()?;
    let order = ctx.api.current_order(table.table_id).await?;
    print_order(&order);
    Ok(())
}

async fn set_status(ctx: &mut AppContext, order_id: i64, status: &str) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    let order = ctx.api.update_order_status(order_id, status).await?;
    println!("Order #{} is now {}", order.id, order.status);
    Ok(())
}

pub(crate) fn parse_status(value: &str) -> anyhow::Result<OrderStatus> {
    let status = match value {
        "pending" => OrderStatus::Pending,
        "accepted" => OrderStatus::Accepted,
        "cooking" => OrderStatus::Cooking,
        "ready" => OrderStatus::Ready,
        "serving" => OrderStatus::Serving,
        "completed" => OrderStatus::Completed,
        "cancelled" => OrderStatus::Cancelled,
        "no_show" => OrderStatus::NoShow,
        other => bail!(
            "Unknown order status '{}'. One of: pending, accepted, cooking, ready, serving, completed, cancelled, no_show",
            other
        ),
    };
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_round_trips_display() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Cooking,
            OrderStatus::Completed,
        ] {
            assert_eq!(parse_status(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_status_rejects_unknown() {
        assert!(parse_status("frozen").is_err());
    }
}

//! Feature views
//!
//! One module per feature area. Each handler prints its result and
//! returns; errors bubble to the command boundary in `main`.

mod admin;
mod auth;
mod cart;
mod dashboard;
mod menu;
mod orders;
mod reservations;
mod table;
mod waiter;

use crate::cli::Command;
use crate::context::AppContext;
use samovar_client::CheckoutTotals;
use shared::models::Order;

pub async fn dispatch(command: Command, ctx: &mut AppContext) -> anyhow::Result<()> {
    match command {
        Command::Login { username, password } => auth::login(ctx, &username, &password).await,
        Command::Register {
            username,
            password,
            email,
        } => auth::register(ctx, &username, &password, email).await,
        Command::Logout => auth::logout(ctx),
        Command::Me => auth::me(ctx).await,
        Command::Scan { code } => table::scan(ctx, &code).await,
        Command::Qr { code } => table::qr(ctx, &code).await,
        Command::Menu => menu::show(ctx).await,
        Command::Zones => table::zones(ctx).await,
        Command::CallWaiter { message } => table::call_waiter(ctx, message).await,
        Command::Cart(cmd) => cart::dispatch(ctx, cmd).await,
        Command::Check => cart::check(ctx),
        Command::Checkout(args) => cart::checkout(ctx, args).await,
        Command::Orders(cmd) => orders::dispatch(ctx, cmd).await,
        Command::Waiter(cmd) => waiter::dispatch(ctx, cmd).await,
        Command::Reserve(args) => reservations::create(ctx, args).await,
        Command::Reservations => reservations::list(ctx).await,
        Command::Admin(cmd) => admin::dispatch(ctx, cmd).await,
        Command::Dashboard => dashboard::show(ctx).await,
    }
}

/// Render minor currency units as a decimal amount
pub(crate) fn format_money(amount: i64) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}

pub(crate) fn print_totals(totals: &CheckoutTotals) {
    println!("  Subtotal:     {:>10}", format_money(totals.subtotal));
    println!(
        "  Service fee:  {:>10}  ({}%)",
        format_money(totals.service_fee),
        totals.service_fee_percent
    );
    if totals.tip > 0 {
        println!("  Tip:          {:>10}", format_money(totals.tip));
    }
    println!("  Total:        {:>10}", format_money(totals.total));
}

pub(crate) fn print_order(order: &Order) {
    let table = order
        .table_number
        .map(|n| format!("table {}", n))
        .unwrap_or_else(|| "no table".to_string());
    let paid = if order.is_paid { ", paid" } else { "" };
    println!("Order #{} ({}, {}{})", order.id, table, order.status, paid);
    for item in &order.items {
        println!(
            "  {} x{}  {}",
            item.name,
            item.quantity,
            format_money(item.price * item.quantity as i64)
        );
    }
    println!("  Total: {}", format_money(order.total_amount));
    if order.tips_amount > 0 {
        println!("  Tips:  {}", format_money(order.tips_amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(6600), "66.00");
        assert_eq!(format_money(605), "6.05");
        assert_eq!(format_money(99), "0.99");
        assert_eq!(format_money(0), "0.00");
    }
}

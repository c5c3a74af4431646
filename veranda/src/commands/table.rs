//! Table scan and waiter call

use crate::context::AppContext;
use samovar_client::ApiClient;

/// Resolve a short code and persist the table context
///
/// Without a login this also flips the session into guest mode, which
/// is how QR walk-ins order.
pub async fn scan(ctx: &mut AppContext, code: &str) -> anyhow::Result<()> {
    let table = ctx.api.resolve_table(code).await?;
    ctx.session.set_current_table(&table)?;
    if ctx.session.token().is_none() {
        ctx.session.set_guest_mode(true)?;
    }

    let restaurant = table
        .restaurant_name
        .clone()
        .unwrap_or_else(|| format!("restaurant {}", table.restaurant_id));
    let vip = if table.is_vip { ", VIP" } else { "" };
    println!(
        "Table {} at {} (seats {}{})",
        table.table_number, restaurant, table.capacity, vip
    );
    Ok(())
}

/// Show the shareable link and QR image URL for a table code
pub async fn qr(ctx: &mut AppContext, code: &str) -> anyhow::Result<()> {
    let link = ctx.api.qr_link(code).await?;
    println!("Link:     {}", link.url);
    println!("QR image: {}", ApiClient::qr_image_url(&link.url, 300));
    Ok(())
}

pub async fn zones(ctx: &mut AppContext) -> anyhow::Result<()> {
    let zones = ctx.api.zones(ctx.restaurant_id()?).await?;
    if zones.is_empty() {
        println!("No zones defined");
        return Ok(());
    }
    for zone in &zones {
        match &zone.color {
            Some(color) => println!("  [{}] {} ({})", zone.id, zone.name, color),
            None => println!("  [{}] {}", zone.id, zone.name),
        }
    }
    Ok(())
}

pub async fn call_waiter(ctx: &mut AppContext, message: Option<String>) -> anyhow::Result<()> {
    let table = ctx.require_table()?;
    let call = ctx.api.call_waiter(table.table_id, message).await?;
    println!(
        "Waiter called to table {} (call #{})",
        table.table_number, call.id
    );
    Ok(())
}

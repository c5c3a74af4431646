//! Reservation commands

use anyhow::Context as _;
use chrono::{NaiveDate, NaiveTime};

use crate::cli::ReserveArgs;
use crate::context::AppContext;
use shared::models::ReservationCreate;

pub async fn create(ctx: &mut AppContext, args: ReserveArgs) -> anyhow::Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .context("Invalid date, expected YYYY-MM-DD")?;
    let time =
        NaiveTime::parse_from_str(&args.time, "%H:%M").context("Invalid time, expected HH:MM")?;

    let reservation = ReservationCreate {
        restaurant_id: ctx.restaurant_id()?,
        guest_name: args.name,
        guest_phone: args.phone,
        date,
        time,
        party_size: args.party_size,
        zone_id: args.zone_id,
        table_id: args.table_id,
    };
    let created = ctx.api.create_reservation(&reservation).await?;
    println!(
        "Reservation #{} for {} on {} at {} ({})",
        created.id, created.guest_name, created.date, created.time, created.status
    );
    Ok(())
}

pub async fn list(ctx: &mut AppContext) -> anyhow::Result<()> {
    let reservations = ctx.api.reservations().await?;
    if reservations.is_empty() {
        println!("No reservations");
        return Ok(());
    }
    for r in &reservations {
        println!(
            "  [{}] {} {} {}  party of {}  ({})",
            r.id, r.guest_name, r.date, r.time, r.party_size, r.status
        );
    }
    Ok(())
}

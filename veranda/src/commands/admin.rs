//! Restaurant management commands

use anyhow::bail;

use crate::cli::AdminCommand;
use crate::commands::format_money;
use crate::context::AppContext;
use samovar_client::ApiClient;
use shared::models::{
    CategoryCreate, CategoryUpdate, DishCreate, DishUpdate, TableStatus,
};

const QR_IMAGE_SIZE: u32 = 300;

pub async fn dispatch(ctx: &mut AppContext, command: AdminCommand) -> anyhow::Result<()> {
    match command {
        AdminCommand::Analytics => analytics(ctx).await,
        AdminCommand::Link { hall_id, table_id } => link(ctx, hall_id, table_id).await,
        AdminCommand::TableStatus { table_id, status } => {
            table_status(ctx, table_id, &status).await
        }
        AdminCommand::StopList { dish_id, off } => stop_list(ctx, dish_id, !off).await,
        AdminCommand::DishAdd {
            category_id,
            name,
            price,
            description,
            image_url,
        } => {
            let dish = ctx
                .api
                .create_dish(
                    ctx.restaurant_id()?,
                    &DishCreate {
                        category_id,
                        name,
                        description,
                        price,
                        image_url,
                    },
                )
                .await?;
            println!("Dish #{} created: {}", dish.id, dish.name);
            Ok(())
        }
        AdminCommand::DishUpdate {
            dish_id,
            name,
            price,
            description,
            available,
        } => {
            let dish = ctx
                .api
                .update_dish(
                    dish_id,
                    &DishUpdate {
                        category_id: None,
                        name,
                        description,
                        price,
                        image_url: None,
                        is_available: available,
                    },
                )
                .await?;
            println!("Dish #{} updated", dish.id);
            Ok(())
        }
        AdminCommand::DishDelete { dish_id } => {
            ctx.api.delete_dish(dish_id).await?;
            println!("Dish #{} deleted", dish_id);
            Ok(())
        }
        AdminCommand::CategoryAdd { name, position } => {
            let category = ctx
                .api
                .create_category(ctx.restaurant_id()?, &CategoryCreate { name, position })
                .await?;
            println!("Category #{} created: {}", category.id, category.name);
            Ok(())
        }
        AdminCommand::CategoryUpdate {
            category_id,
            name,
            position,
        } => {
            let category = ctx
                .api
                .update_category(category_id, &CategoryUpdate { name, position })
                .await?;
            println!("Category #{} updated", category.id);
            Ok(())
        }
    }
}

async fn analytics(ctx: &mut AppContext) -> anyhow::Result<()> {
    let overview = ctx.api.analytics_overview(ctx.restaurant_id()?).await?;
    println!("Orders today:   {}", overview.orders_today);
    println!("Revenue today:  {}", format_money(overview.revenue_today));
    println!("Average check:  {}", format_money(overview.average_check));
    println!("Active tables:  {}", overview.active_tables);
    Ok(())
}

async fn link(ctx: &mut AppContext, hall_id: i64, table_id: i64) -> anyhow::Result<()> {
    let restaurant_id = ctx.restaurant_id()?;
    let link = ctx
        .api
        .generate_table_link(restaurant_id, hall_id, table_id)
        .await?;
    println!("Short code: {}", link.short_code);
    println!("Link:       {}", link.url);
    println!("QR image:   {}", ApiClient::qr_image_url(&link.url, QR_IMAGE_SIZE));
    Ok(())
}

async fn table_status(ctx: &mut AppContext, table_id: i64, status: &str) -> anyhow::Result<()> {
    let status = parse_table_status(status)?;
    let table = ctx.api.set_table_status(table_id, status).await?;
    println!("Table {} is now {}", table.table_number, table.status);
    Ok(())
}

async fn stop_list(ctx: &mut AppContext, dish_id: i64, on: bool) -> anyhow::Result<()> {
    let dish = ctx.api.set_stop_list(dish_id, on).await?;
    if dish.on_stop_list {
        println!("{} is on the stop list", dish.name);
    } else {
        println!("{} is back on the menu", dish.name);
    }
    Ok(())
}

fn parse_table_status(value: &str) -> anyhow::Result<TableStatus> {
    let status = match value {
        "available" => TableStatus::Available,
        "reserved" => TableStatus::Reserved,
        "occupied" => TableStatus::Occupied,
        "held" => TableStatus::Held,
        "out_of_service" => TableStatus::OutOfService,
        other => bail!(
            "Unknown table status '{}'. One of: available, reserved, occupied, held, out_of_service",
            other
        ),
    };
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_status_round_trips_display() {
        for status in [
            TableStatus::Available,
            TableStatus::Occupied,
            TableStatus::OutOfService,
        ] {
            assert_eq!(parse_table_status(&status.to_string()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_table_status_rejects_unknown() {
        assert!(parse_table_status("on_fire").is_err());
    }
}

//! Menu display

use crate::commands::format_money;
use crate::context::AppContext;
use shared::models::Dish;

pub async fn show(ctx: &mut AppContext) -> anyhow::Result<()> {
    let restaurant_id = ctx.restaurant_id()?;
    let restaurant = ctx.api.restaurant(restaurant_id).await?;
    println!("{}", restaurant.name);
    if let Some(address) = &restaurant.address {
        println!("{}", address);
    }
    println!();

    let mut categories = ctx.api.menu(restaurant_id).await?;
    categories.sort_by_key(|c| c.position);

    for category in &categories {
        println!("== {} ==", category.name);
        for dish in &category.dishes {
            println!("{}", render_dish(dish));
        }
        println!();
    }
    Ok(())
}

fn render_dish(dish: &Dish) -> String {
    let mut line = format!("  [{}] {}  {}", dish.id, dish.name, format_money(dish.price));
    if dish.on_stop_list {
        line.push_str("  (out of stock)");
    } else if !dish.is_available {
        line.push_str("  (unavailable)");
    }
    line
}

/// Find a dish by id across all menu categories
pub async fn find_dish(ctx: &AppContext, restaurant_id: i64, dish_id: i64) -> anyhow::Result<Dish> {
    let categories = ctx.api.menu(restaurant_id).await?;
    categories
        .into_iter()
        .flat_map(|c| c.dishes)
        .find(|d| d.id == dish_id)
        .ok_or_else(|| anyhow::anyhow!("Dish {} is not on the menu", dish_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish() -> Dish {
        Dish {
            id: 7,
            category_id: 1,
            name: "Pelmeni".to_string(),
            description: None,
            price: 2500,
            image_url: None,
            is_available: true,
            on_stop_list: false,
        }
    }

    #[test]
    fn test_render_dish() {
        assert_eq!(render_dish(&dish()), "  [7] Pelmeni  25.00");
    }

    #[test]
    fn test_render_stop_listed_dish() {
        let mut d = dish();
        d.on_stop_list = true;
        assert!(render_dish(&d).ends_with("(out of stock)"));
    }
}

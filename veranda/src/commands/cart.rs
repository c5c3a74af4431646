//! Cart and checkout commands

use anyhow::bail;
use std::collections::BTreeMap;

use crate::cli::{CartCommand, CheckoutArgs};
use crate::commands::{format_money, menu, print_totals};
use crate::context::AppContext;
use samovar_client::nav::{NavDecision, Route, guard};
use samovar_client::{Cart, CartPolicy};
use shared::models::{OrderCreate, OrderItemCreate, OrderPay};

/// Guests keep one line per add; logged-in users merge by dish
fn policy(ctx: &AppContext) -> CartPolicy {
    if ctx.session.token().is_some() {
        CartPolicy::MergeByDish
    } else {
        CartPolicy::AppendLine
    }
}

pub async fn dispatch(ctx: &mut AppContext, command: CartCommand) -> anyhow::Result<()> {
    match command {
        CartCommand::Add { dish_id } => add(ctx, dish_id).await,
        CartCommand::Show => show(ctx),
        CartCommand::Update { index, delta } => {
            let mut cart = Cart::load(&ctx.session, policy(ctx));
            cart.update_quantity(&mut ctx.session, index, delta)?;
            show(ctx)
        }
        CartCommand::Remove { index } => {
            let mut cart = Cart::load(&ctx.session, policy(ctx));
            cart.remove_item(&mut ctx.session, index)?;
            show(ctx)
        }
        CartCommand::Clear => {
            let mut cart = Cart::load(&ctx.session, policy(ctx));
            cart.clear(&mut ctx.session)?;
            println!("Cart cleared");
            Ok(())
        }
    }
}

async fn add(ctx: &mut AppContext, dish_id: i64) -> anyhow::Result<()> {
    let restaurant_id = ctx.restaurant_id()?;
    let dish = menu::find_dish(ctx, restaurant_id, dish_id).await?;
    if dish.on_stop_list {
        bail!("{} is out of stock right now", dish.name);
    }
    if !dish.is_available {
        bail!("{} is not available", dish.name);
    }

    let mut cart = Cart::load(&ctx.session, policy(ctx));
    cart.add_item(&mut ctx.session, &dish)?;
    println!("Added {} ({})", dish.name, format_money(dish.price));
    Ok(())
}

fn show(ctx: &AppContext) -> anyhow::Result<()> {
    let cart = Cart::load(&ctx.session, policy(ctx));
    if cart.is_empty() {
        println!("Cart is empty");
        return Ok(());
    }

    for (index, line) in cart.lines().iter().enumerate() {
        println!(
            "  [{}] {} x{}  {}",
            index,
            line.name,
            line.quantity,
            format_money(line.line_total())
        );
    }
    print_totals(&cart.check_totals());
    Ok(())
}

/// The pre-checkout "my check" view: no tip yet
pub fn check(ctx: &mut AppContext) -> anyhow::Result<()> {
    show(ctx)
}

pub async fn checkout(ctx: &mut AppContext, args: CheckoutArgs) -> anyhow::Result<()> {
    match guard(Route::Checkout, &ctx.session) {
        NavDecision::Allow => {}
        _ => bail!("Checkout requires a login: veranda login <USERNAME> <PASSWORD>"),
    }
    let table = ctx.require_table()?;

    let mut cart = Cart::load(&ctx.session, policy(ctx));
    if cart.is_empty() {
        bail!("Cart is empty");
    }
    if let Some(percent) = args.tip_percent {
        cart.set_tip_percent(percent);
    } else if let Some(amount) = args.tip_amount {
        cart.set_tip_amount(amount);
    }
    let totals = cart.totals();

    let order = ctx
        .api
        .create_order(&OrderCreate {
            table_id: table.table_id,
            items: collect_items(&cart),
        })
        .await?;
    println!("Order #{} placed", order.id);

    let payment = OrderPay {
        tips_amount: totals.tip,
        payment_method: args.payment_method,
    };
    let paid = ctx.api.pay_order(order.id, &payment).await?;

    print_totals(&totals);
    println!("Order #{} paid ({})", paid.id, paid.status);

    cart.clear(&mut ctx.session)?;
    Ok(())
}

/// Aggregate cart lines into order items, one per dish
fn collect_items(cart: &Cart) -> Vec<OrderItemCreate> {
    let mut by_dish: BTreeMap<i64, i32> = BTreeMap::new();
    for line in cart.lines() {
        *by_dish.entry(line.dish_id).or_default() += line.quantity;
    }
    by_dish
        .into_iter()
        .map(|(dish_id, quantity)| OrderItemCreate { dish_id, quantity })
        .collect()
}

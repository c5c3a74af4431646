//! Role-gated dashboard entry point
//!
//! Mirrors the app's landing flow: unauthenticated users are sent to
//! login, waiters are dispatched to their own view, everyone else gets
//! a summary for their role. The branching here is presentation only.

use crate::context::AppContext;
use samovar_client::nav::{NavDecision, Route, guard};
use shared::models::Role;

pub async fn show(ctx: &mut AppContext) -> anyhow::Result<()> {
    match guard(Route::Dashboard, &ctx.session) {
        NavDecision::RedirectLogin => {
            println!("Please log in: veranda login <USERNAME> <PASSWORD>");
            Ok(())
        }
        NavDecision::RedirectWaiter => waiter_summary(ctx).await,
        NavDecision::Allow => {
            let Some(user) = ctx.current_user() else {
                println!("Please log in: veranda login <USERNAME> <PASSWORD>");
                return Ok(());
            };
            println!("Welcome back, {} ({})", user.username, user.role);
            match user.role {
                Role::Admin | Role::Moderator | Role::Owner => {
                    super::admin::dispatch(ctx, crate::cli::AdminCommand::Analytics).await
                }
                _ => super::orders::dispatch(ctx, crate::cli::OrdersCommand::My).await,
            }
        }
    }
}

async fn waiter_summary(ctx: &mut AppContext) -> anyhow::Result<()> {
    println!("Waiter view");
    super::waiter::dispatch(ctx, crate::cli::WaiterCommand::Calls).await?;
    super::waiter::dispatch(ctx, crate::cli::WaiterCommand::Orders).await
}

//! Login, registration, and account commands

use crate::context::AppContext;
use shared::client::RegisterRequest;

pub async fn login(ctx: &mut AppContext, username: &str, password: &str) -> anyhow::Result<()> {
    let response = ctx.api.login(username, password).await?;
    ctx.save_login(&response)?;
    println!(
        "Logged in as {} ({})",
        response.user.username, response.user.role
    );
    Ok(())
}

pub async fn register(
    ctx: &mut AppContext,
    username: &str,
    password: &str,
    email: Option<String>,
) -> anyhow::Result<()> {
    let request = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email,
    };
    let user = ctx.api.register(&request).await?;
    println!("Registered {}. Log in to continue.", user.username);
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.force_logout();
    println!("Logged out");
    Ok(())
}

pub async fn me(ctx: &mut AppContext) -> anyhow::Result<()> {
    let user = ctx.api.me().await?;
    println!("{} ({})", user.username, user.role);
    if let Some(id) = user.restaurant_id {
        println!("Restaurant: {}", id);
    }
    Ok(())
}

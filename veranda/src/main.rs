use clap::Parser;

use samovar_client::ClientError;
use veranda::cli::Cli;
use veranda::{AppContext, commands, logger};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init(cli.log_level.as_deref(), cli.log_dir.as_deref());

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = AppContext::from_cli(&cli)?;

    match commands::dispatch(cli.command, &mut ctx).await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Expired or missing token on a protected call drops the session
            if matches!(
                e.downcast_ref::<ClientError>(),
                Some(ClientError::Unauthorized)
            ) {
                ctx.force_logout();
                eprintln!("Session expired. Please log in again.");
            }
            Err(e)
        }
    }
}

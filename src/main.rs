use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vidfeed::app::AppContext;
use vidfeed::cli::{commands, Cli, Commands};
use vidfeed::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config)?;
    ctx.store().create_if_missing()?;

    match cli.command {
        Commands::List => {
            commands::list_subscriptions(&ctx)?;
        }
        Commands::Add {
            identifier,
            platform,
        } => {
            commands::add_subscription(&ctx, &identifier, platform).await?;
        }
        Commands::Remove { identifier } => {
            commands::remove_subscription(&ctx, &identifier)?;
        }
        Commands::Videos { json } => {
            commands::list_videos(&ctx, json).await?;
        }
        Commands::Serve { .. } => {
            commands::serve(Arc::new(ctx)).await?;
        }
        Commands::Embed { url } => {
            commands::lookup_embed(&ctx, &url).await?;
        }
    }

    Ok(())
}

use std::io::Write;
use std::sync::Arc;

use crate::app::{AppContext, Result};
use crate::domain::Platform;
use crate::server;
use crate::store::json::to_indented_json;

pub fn list_subscriptions(ctx: &AppContext) -> Result<()> {
    let subs = ctx.subscriptions.list()?;

    if subs.is_empty() {
        println!("No subscriptions");
        return Ok(());
    }

    for sub in &subs {
        println!("{} [{}]\n  {}", sub.name, sub.platform, sub.id);
    }

    Ok(())
}

pub async fn add_subscription(ctx: &AppContext, identifier: &str, platform: Platform) -> Result<()> {
    let outcome = ctx.subscriptions.add(identifier, platform).await?;

    if outcome.inserted {
        println!(
            "Added {} [{}]: {}",
            outcome.subscription.name, outcome.subscription.platform, outcome.subscription.id
        );
    } else {
        println!("Subscription already exists: {}", outcome.subscription.id);
    }

    Ok(())
}

pub fn remove_subscription(ctx: &AppContext, identifier: &str) -> Result<()> {
    let before = ctx.subscriptions.list()?.len();
    let after = ctx.subscriptions.remove(identifier)?.len();

    if before == after {
        println!("No subscription with identifier: {}", identifier);
    } else {
        println!("Removed {} subscription(s): {}", before - after, identifier);
    }

    Ok(())
}

pub async fn list_videos(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.aggregate().await?;

    if json {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&to_indented_json(&result)?)?;
        writeln!(stdout)?;
        return Ok(());
    }

    if result.is_empty() {
        println!("No videos");
        return Ok(());
    }

    // Dates are in each platform's own format
    for entry in &result.entries {
        println!(
            "[{}] {} | {} | {}\n  {}",
            entry.platform,
            entry.published_at,
            entry.author,
            entry.display_title(),
            entry.video_ref
        );
    }

    println!("{} videos", result.len());
    Ok(())
}

pub async fn serve(ctx: Arc<AppContext>) -> Result<()> {
    let port = ctx.config.server.port;
    server::serve(ctx, port).await
}

pub async fn lookup_embed(ctx: &AppContext, url: &str) -> Result<()> {
    let embed_url = ctx.lookup_embed(url).await?;
    println!("{}", embed_url);
    Ok(())
}

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::domain::Platform;

#[derive(Parser)]
#[command(name = "vidfeed", version)]
#[command(about = "Aggregate video uploads from Rumble, Odysee and YouTube", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/vidfeed/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON subscriptions file
    #[arg(short, long, global = true)]
    pub subs: Option<PathBuf>,

    /// Maximum feeds fetched at once (0: no limit)
    #[arg(short = 'w', long, global = true)]
    pub max_concurrency: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subscriptions
    List,
    /// Subscribe to a channel
    Add {
        /// Rumble channel slug, Odysee `name:claimID`, or YouTube `UC…` channel ID
        identifier: String,

        /// Platform the channel lives on: rumble, odysee or youtube
        #[arg(short, long)]
        platform: Platform,
    },
    /// Remove every subscription with this identifier
    Remove {
        identifier: String,
    },
    /// Fetch all feeds and print the videos
    Videos {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Look up the embed URL of a Rumble video
    Embed {
        /// Rumble watch page URL
        url: String,
    },
}

impl Cli {
    /// Apply command-line flags on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(subs) = &self.subs {
            config.server.subs_file = subs.clone();
        }
        if let Some(workers) = self.max_concurrency {
            config.aggregator.max_concurrency = workers;
        }
        if let Commands::Serve { port: Some(port) } = &self.command {
            config.server.port = *port;
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glidepage_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glidepage")]
#[command(author, version, about = "Terminal rendition of the Bloodline Vengeance studio page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Drive the scroll controller headlessly and print the frame trace
    Simulate {
        /// Offset to glide to
        #[arg(short, long, default_value_t = 600.0)]
        target: f64,
        /// Document scroll limit
        #[arg(short, long, default_value_t = 1000.0)]
        limit: f64,
        /// Number of frames to step
        #[arg(short, long, default_value_t = 90)]
        frames: u32,
        /// Emit the trace as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            target,
            limit,
            frames,
            json,
        }) => commands::simulate::run(&config, target, limit, frames, json),
        Some(Commands::Config) => commands::config::run(&config),
    }
}

//! Drill CLI - drill command

use clap::{Parser, Subcommand};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

mod cmd;
mod config;
mod demos;

/// Drill - Classic interview exercises as runnable demos
#[derive(Parser)]
#[command(name = "drill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available demos
    List,
    /// Run a canned demo by name
    Run {
        /// Demo name (see `drill list`)
        name: Option<String>,

        /// Run every demo in order
        #[arg(long)]
        all: bool,
    },
    /// Echo stdin lines through a debounced printer
    Debounce {
        /// Quiet period in milliseconds (default: from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Echo stdin lines through a throttled printer
    Throttle {
        /// Minimum interval in milliseconds (default: from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Print a commented sample config file
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = config::DemoConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List => cmd::list::run().await,
        Commands::Run { name, all } => cmd::run::run(name.as_deref(), all, &config).await,
        Commands::Debounce { delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.pace.debounce_delay_ms));
            cmd::debounce::run(delay).await
        }
        Commands::Throttle { delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.pace.throttle_delay_ms));
            cmd::throttle::run(delay).await
        }
        Commands::Config => cmd::config::run().await,
    }
}

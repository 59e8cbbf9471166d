mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use drawtick_core::RecordStore;
use drawtick_lottery::LotteryRegistry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "drawtick")]
#[command(about = "Once-per-tick lottery draw simulator")]
#[command(version)]
struct Cli {
    /// Data directory for the draw database
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw every tick until interrupted
    Run,
    /// Draw once for the current tick
    Draw,
    /// Show committed draws, newest first
    History {
        /// Lottery type
        #[arg(default_value = "toto")]
        lottery_type: String,
        /// Zero-based page number
        #[arg(short, long, default_value_t = 0)]
        page: usize,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the number of winning draws and their prize total
    Wins {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every draw and reset all counters
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handles shared by every command.
pub struct App {
    pub config: CliConfig,
    pub store: RecordStore,
    pub registry: Arc<LotteryRegistry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "drawtick={},drawtick_core={},drawtick_lottery={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CliConfig::from_env(cli.data_dir);

    // Ensure data directory exists
    tokio::fs::create_dir_all(&config.data_dir).await?;

    let store = RecordStore::open_path(config.database_path(), config.store.clone()).await?;
    let app = App {
        config,
        store,
        registry: Arc::new(LotteryRegistry::with_defaults()),
    };

    let result = match cli.command {
        Commands::Run => commands::run(&app).await,
        Commands::Draw => commands::draw_once(&app).await,
        Commands::History {
            lottery_type,
            page,
            json,
        } => commands::show_history(&app, &lottery_type, page, json).await,
        Commands::Wins { json } => commands::show_wins(&app, json).await,
        Commands::Reset { yes } => commands::reset(&app, yes).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

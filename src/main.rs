//! Insight Monitor CLI
//!
//! Terminal rendition of the Competitive Landscape Monitor dashboard:
//! fetches the insights endpoint once and prints the feed and category
//! breakdown to stdout. Logs go to stderr.
//!
//! # Configuration
//!
//! - config file: `--config`, or the first of
//!   `~/.config/insight-monitor/config.toml`, `/etc/insight-monitor/config.toml`,
//!   `./config.toml`
//! - `MONITOR_API_URL`: API base override
//! - `RUST_LOG`: log filter (default: `logging.level` from the config)

use anyhow::Context;
use clap::{Parser, Subcommand};
use insight_monitor::config::{generate_default_config, Config, LoggingConfig};
use insight_monitor::render::{render_screen, LOADING_TEXT};
use insight_monitor::{DashboardController, DashboardStore, HttpInsightSource, LoadOutcome};
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "insight-monitor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Competitor insights dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides config and MONITOR_API_URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Show dates in UTC
    #[arg(long)]
    pub utc: bool,

    /// Disable colored legend swatches
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => std::fs::write(&path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?,
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if cli.utc {
        config.display.utc = true;
    }
    if cli.no_color {
        config.display.color = false;
    }

    init_logging(&config.logging);
    tracing::debug!("Insight Monitor v{}", env!("CARGO_PKG_VERSION"));

    let source = HttpInsightSource::from_config(&config.api)
        .context("Failed to build HTTP client")?;
    let store = DashboardStore::new();
    let controller = DashboardController::new(source, &store);

    eprintln!("{}", LOADING_TEXT);

    let outcome = mount_until_interrupted(
        controller.mount(),
        tokio::signal::ctrl_c(),
        || controller.dispose(),
    )
    .await;
    controller.dispose();
    store.close();

    if outcome == LoadOutcome::Cancelled {
        return Ok(());
    }

    print!("{}", render_screen(&store.snapshot(), &config.display.text_options()));
    std::io::stdout().flush()?;

    if let LoadOutcome::Failed(err) = outcome {
        // The dashboard already shows the user-facing message
        std::process::exit(exit_code(&err));
    }

    Ok(())
}

/// Await `mount` unless `interrupt` fires first, in which case `cancel` runs
/// and the outcome is `Cancelled`. If the interrupt listener itself fails,
/// the fetch keeps going.
async fn mount_until_interrupted<M, I, C>(mount: M, interrupt: I, cancel: C) -> LoadOutcome
where
    M: Future<Output = LoadOutcome>,
    I: Future<Output = std::io::Result<()>>,
    C: FnOnce(),
{
    tokio::pin!(mount);

    tokio::select! {
        outcome = &mut mount => outcome,
        signal = interrupt => match signal {
            Ok(()) => {
                tracing::info!("Interrupted, cancelling fetch");
                cancel();
                LoadOutcome::Cancelled
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot listen for Ctrl-C, waiting for the fetch");
                mount.await
            }
        },
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("insight_monitor={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn exit_code(err: &insight_monitor::FetchError) -> i32 {
    use insight_monitor::FetchError;

    match err {
        FetchError::Transport(_) | FetchError::Client(_) => 2,
        FetchError::Status { .. } => 3,
        FetchError::Decode(_) => 4,
    }
}

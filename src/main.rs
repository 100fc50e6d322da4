use anyhow::Context;
use clap::{Parser, Subcommand};
use fitroom_core::config::Config;
use std::path::{Path, PathBuf};

mod commands;

#[derive(Parser)]
#[command(name = "fitroom", about = "fitroom: natural-language product search")]
struct Cli {
    /// Write debug logs to /tmp/fitroom-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/fitroom/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the color, category and store filter a query resolves to.
    Interpret {
        /// Free-text query, e.g. `blue shirts`.
        query: Vec<String>,
    },
    /// Run a query against a JSON catalog file.
    Search {
        /// Free-text query, e.g. `red t-shirts`.
        #[arg(required = true)]
        query: Vec<String>,
        /// JSON array of product documents.
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Print the active color and category tables in match order.
    Lexicon,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fitroom-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fitroom debug log started, tail -f /tmp/fitroom-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Interpret { query } => commands::interpret(&config, &query.join(" ")),
        Command::Search { query, catalog } => {
            commands::search(&config, &query.join(" "), &catalog).await
        }
        Command::Lexicon => commands::lexicon(&config),
    }
}

/// `--config PATH` if given, else the user config file. Errors in either are
/// reported, never replaced by defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load().context("failed to load user config"),
    }
}

use std::{io, path::PathBuf};

use abi::Config;
use anyhow::{Context, Result};
use clap::Parser;
use service::RsvpService;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Track room bookings for a small hotel from the terminal.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Store file, overrides the configured path
    #[arg(short, long)]
    store: Option<PathBuf>,
}

impl Args {
    fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(filename) => Config::load(filename)?,
            None => Config::default(),
        };
        if let Some(path) = &self.store {
            config.store.path = path.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // stdout belongs to the menu, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config()?;
    info!("using store file {}", config.store.path.display());

    let mut stdout = io::stdout().lock();
    let mut service = RsvpService::from_config(&config, &mut stdout)?;
    service
        .run(io::stdin().lock(), stdout)
        .context("console I/O failed")
}

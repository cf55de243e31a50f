//! Recycling Dashboard Server
//!
//! Run with: cargo run --bin recycling-dashboard
//!
//! Configuration is read from `--config`, the default config locations, or
//! environment variables (see [`recycling_dashboard::config`]). Command-line
//! flags override both.

use anyhow::Context;
use clap::Parser;
use recycling_dashboard::{logging, serve, AppState, Config, Dashboard, RecyclingData};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "recycling-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the waste and recycling dashboard")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recycling dataset CSV (default: bundled dataset)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Config loading logs before the configured subscriber exists
    let mut config = tracing::subscriber::with_default(logging::bootstrap(), || {
        Config::resolve(args.config.as_deref())
    })?;
    if let Some(data) = args.data {
        config.data.path = Some(data);
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init(&config.logging);

    tracing::info!("Starting recycling dashboard v{}", env!("CARGO_PKG_VERSION"));

    match &config.data.path {
        Some(path) => tracing::info!("Dataset: {:?}", path),
        None => tracing::info!("Dataset: bundled"),
    }

    let data = RecyclingData::load_or_bundled(
        config.data.path.as_deref(),
        &config.data.national_area,
    )
    .context("failed to load recycling dataset")?;

    tracing::info!(
        areas = data.area_list().len(),
        periods = data.periods().len(),
        latest = %data.latest_period(),
        "Dataset loaded"
    );

    let dashboard = Dashboard::new(
        Arc::new(data),
        config.data.default_area.clone(),
        config.data.default_period.clone(),
    )
    .context("invalid dashboard defaults")?;

    let state = AppState::new(dashboard, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Recycling dashboard stopped");
    Ok(())
}

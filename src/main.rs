// Main entry point - Dependency injection and command dispatch
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::stromgedacht_client::StromGedachtClient;
use crate::infrastructure::svg_surface::SvgSurface;
use crate::presentation::cli::{Cli, Commands};
use crate::presentation::display::show;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the figure
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Infrastructure adapters
    let client = StromGedachtClient::new(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?;
    let surface = SvgSurface::new(config.chart.clone());

    let service = ChartService::new(Arc::new(client), Arc::new(surface));

    let figure = match &cli.command {
        Commands::Now { zip } => service.render_current_status(zip).await?,
        Commands::Strip { zip } => service.render_forecast_strip(zip).await?,
        Commands::Series { zip } => service.render_forecast_series(zip).await?,
    };

    show(&figure, cli.output.as_deref())
}

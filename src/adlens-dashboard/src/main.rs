//! AdLens — campaign analytics dashboard service.
//!
//! Entry point: loads configuration, generates the in-memory source tables,
//! and serves the daily/weekly/pacing views over HTTP.

use adlens_api::ApiServer;
use adlens_core::config::AppConfig;
use adlens_pipeline::SampleData;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "adlens-dashboard")]
#[command(about = "Campaign analytics dashboard over daily, weekly, and pacing views")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "ADLENS__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "ADLENS__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Seed for the simulated data source (overrides config)
    #[arg(long, env = "ADLENS__DATA__SEED")]
    seed: Option<u64>,

    /// Number of daily records to generate (overrides config)
    #[arg(long, env = "ADLENS__DATA__DAILY_ROWS")]
    daily_rows: Option<usize>,

    /// Number of weekly campaign contexts to generate (overrides config)
    #[arg(long, env = "ADLENS__DATA__WEEKLY_ROWS")]
    weekly_rows: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adlens=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    info!("AdLens dashboard starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(seed) = cli.seed {
        config.data.seed = seed;
    }
    if let Some(rows) = cli.daily_rows {
        config.data.daily_rows = rows;
    }
    if let Some(rows) = cli.weekly_rows {
        config.data.weekly_rows = rows;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        seed = config.data.seed,
        daily_rows = config.data.daily_rows,
        weekly_rows = config.data.weekly_rows,
        "Configuration loaded"
    );

    // Generate the in-memory source tables
    let dataset = Arc::new(SampleData::generate(
        config.data.seed,
        config.data.daily_rows,
        config.data.weekly_rows,
    ));
    info!(
        daily = dataset.daily.len(),
        weekly = dataset.weekly.len(),
        pacing = dataset.pacing.len(),
        "Source tables generated"
    );

    // Serve the views
    let server = ApiServer::new(config, dataset);
    server.start_http().await
}

//! API server — mounts the dashboard view routes and operational probes.

use crate::rest::{self, AppState};
use adlens_core::config::AppConfig;
use adlens_pipeline::SampleData;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ApiServer {
    config: AppConfig,
    dataset: Arc<SampleData>,
}

impl ApiServer {
    pub fn new(config: AppConfig, dataset: Arc<SampleData>) -> Self {
        Self { config, dataset }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            dataset: self.dataset.clone(),
            node_id: self.config.node_id.clone(),
            seed: self.config.data.seed,
            start_time: Instant::now(),
        };

        Router::new()
            // Dashboard views
            .route("/v1/views/daily", get(rest::handle_daily))
            .route("/v1/views/weekly", get(rest::handle_weekly))
            .route("/v1/views/pacing", get(rest::handle_pacing))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the HTTP server and serve until shutdown.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = self.router();

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);
        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

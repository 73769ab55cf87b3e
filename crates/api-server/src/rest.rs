//! REST handlers for the three dashboard views and operational endpoints.

use adlens_core::DashboardError;
use adlens_pipeline::{
    daily_view, pacing_view, weekly_view, DailyView, PacingView, RowFilter, SampleData,
    SimulatedMetricSource, WeeklyView,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Default grouping dimension for the daily bubble aggregate.
const DEFAULT_GROUP_BY: &str = "campaign";

/// Query parameter selecting the aggregate dimension; every other parameter
/// is a multi-select filter over an identity column.
const GROUP_BY_PARAM: &str = "group_by";

/// Shared application state for REST handlers. The source tables are
/// immutable; every request recomputes its view from a fresh pass over them.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<SampleData>,
    pub node_id: String,
    pub seed: u64,
    pub start_time: Instant,
}

/// Response envelope shared by the three views.
#[derive(Serialize)]
pub struct ViewResponse<T> {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub view: T,
}

/// Collect repeated query parameters into a multi-select filter, splitting
/// off the reserved `group_by` parameter.
fn parse_params(params: &[(String, String)]) -> (RowFilter, String) {
    let mut filter = RowFilter::new();
    let mut group_by = DEFAULT_GROUP_BY.to_string();

    for (key, value) in params {
        if key == GROUP_BY_PARAM {
            group_by = value.clone();
        } else {
            filter.add(key, value);
        }
    }

    (filter, group_by)
}

fn wrap<T>(view: T) -> Json<ViewResponse<T>> {
    Json(ViewResponse {
        request_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        view,
    })
}

fn error_response(e: DashboardError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DashboardError::UnknownFilterColumn(_) | DashboardError::UnknownDimension(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_query".to_string(),
                message: e.to_string(),
            }),
        ),
        other => {
            error!(error = %other, "view computation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "view_computation_failed".to_string(),
                    message: "Internal processing error".to_string(),
                }),
            )
        }
    }
}

/// GET /v1/views/daily — filtered daily table + bubble aggregate.
pub async fn handle_daily(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ViewResponse<DailyView>>, (StatusCode, Json<ErrorResponse>)> {
    let (filter, group_by) = parse_params(&params);

    let view = daily_view(&state.dataset.daily, &filter, &group_by).map_err(error_response)?;
    info!(rows = view.rows.len(), group_by = %group_by, "daily view served");
    Ok(wrap(view))
}

/// GET /v1/views/weekly — enriched weekly performance table.
pub async fn handle_weekly(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ViewResponse<WeeklyView>>, (StatusCode, Json<ErrorResponse>)> {
    let (filter, _) = parse_params(&params);

    // Seeded per request so identical renders return identical tables.
    let mut source = SimulatedMetricSource::seeded(state.seed);
    let view =
        weekly_view(&state.dataset.weekly, &mut source, &filter).map_err(error_response)?;
    info!(rows = view.rows.len(), "weekly view served");
    Ok(wrap(view))
}

/// GET /v1/views/pacing — enriched pacing table with skipped-record report.
pub async fn handle_pacing(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ViewResponse<PacingView>>, (StatusCode, Json<ErrorResponse>)> {
    let (filter, _) = parse_params(&params);

    let view = pacing_view(&state.dataset.pacing, &filter).map_err(error_response)?;
    info!(
        rows = view.rows.len(),
        skipped = view.skipped.len(),
        "pacing view served"
    );
    Ok(wrap(view))
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if !state.dataset.daily.is_empty() || !state.dataset.weekly.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}

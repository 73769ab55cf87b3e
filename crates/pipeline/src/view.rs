//! View orchestration: each view is a pure function from the immutable
//! source tables to a fresh result, recomputed on every call. No stage
//! mutates shared state, so concurrent renders need no coordination.

use crate::aggregate::{aggregate_daily, BubblePoint};
use crate::expand::{expand_metrics, MetricSource};
use crate::filter::RowFilter;
use crate::insights::enrich_rows;
use crate::pacing::{compute_pacing_batch, PacingRecord, PacingReport, SkippedRecord};
use crate::pivot::pivot_observations;
use crate::types::{CampaignContext, DailyRecord, WideRow};
use adlens_core::DashboardResult;
use serde::Serialize;
use tracing::debug;

/// Daily campaign view: the filtered pass-through table plus the bubble
/// aggregate over the chosen dimension.
#[derive(Debug, Clone, Serialize)]
pub struct DailyView {
    pub rows: Vec<DailyRecord>,
    pub bubbles: Vec<BubblePoint>,
    pub no_data: bool,
}

pub fn daily_view(
    source: &[DailyRecord],
    filter: &RowFilter,
    group_by: &str,
) -> DashboardResult<DailyView> {
    let rows = filter.apply(source)?;
    let bubbles = aggregate_daily(&rows, group_by)?;
    debug!(rows = rows.len(), groups = bubbles.len(), "daily view computed");

    Ok(DailyView {
        no_data: rows.is_empty(),
        rows,
        bubbles,
    })
}

/// Weekly performance view: the enriched wide table.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyView {
    pub rows: Vec<WideRow>,
    pub no_data: bool,
}

/// Run the full weekly pipeline: expand → pivot → derive → filter. The
/// pivot's completeness errors propagate; they mean the metric source broke
/// its shape contract and the table would be arithmetic over holes.
pub fn weekly_view(
    contexts: &[CampaignContext],
    source: &mut dyn MetricSource,
    filter: &RowFilter,
) -> DashboardResult<WeeklyView> {
    let observations = expand_metrics(contexts, source);
    let mut rows = pivot_observations(&observations)?;
    enrich_rows(&mut rows);
    let rows = filter.apply(&rows)?;
    debug!(rows = rows.len(), "weekly view computed");

    Ok(WeeklyView {
        no_data: rows.is_empty(),
        rows,
    })
}

/// Pacing monitor view: derived pacing reports plus any records rejected
/// during derivation.
#[derive(Debug, Clone, Serialize)]
pub struct PacingView {
    pub rows: Vec<PacingReport>,
    pub skipped: Vec<SkippedRecord>,
    pub no_data: bool,
}

pub fn pacing_view(records: &[PacingRecord], filter: &RowFilter) -> DashboardResult<PacingView> {
    let outcome = compute_pacing_batch(records);
    let rows = filter.apply(&outcome.reports)?;
    debug!(
        rows = rows.len(),
        skipped = outcome.skipped.len(),
        "pacing view computed"
    );

    Ok(PacingView {
        no_data: rows.is_empty(),
        rows,
        skipped: outcome.skipped,
    })
}

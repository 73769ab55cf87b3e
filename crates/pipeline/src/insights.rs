//! Derived-field calculator — narrative comparison strings and the
//! actionable-insight classification, computed per wide row.

use crate::types::{Metric, WeekType, WideRow};
use tracing::warn;

/// A week-over-week cost swing beyond this percentage (either direction)
/// flags the campaign for optimization.
const CHANGE_THRESHOLD_PCT: f64 = 30.0;

const INSIGHT_NEEDS_OPTIMIZATION: &str = "This campaign needs optimization. \
    Investigate ad creatives, targeting, and bidding strategy to reduce costs.";

const INSIGHT_STABLE: &str = "Campaign performance is stable. \
    Continue monitoring and optimizing ad strategies.";

const INSIGHT_NO_BASELINE: &str = "Insufficient last-week data to assess cost \
    movement. Keep monitoring until a full week of history is available.";

/// CPM/CPC/CPV this week against last week, two-decimal precision.
pub fn last_week_comparison(row: &WideRow) -> String {
    let this = |m: Metric| row.metrics.value(m, WeekType::ThisWeek);
    let last = |m: Metric| row.metrics.value(m, WeekType::LastWeek);

    format!(
        "CPM: {:.2}, CPC: {:.2}, CPV: {:.2} vs {:.2}, {:.2}, {:.2} last week",
        this(Metric::Cpm),
        this(Metric::Cpc),
        this(Metric::Cpv),
        last(Metric::Cpm),
        last(Metric::Cpc),
        last(Metric::Cpv),
    )
}

/// CPM/VTR/CompletionRate/CPCV this week against the benchmark,
/// two-decimal precision.
pub fn benchmark_comparison(row: &WideRow) -> String {
    let this = |m: Metric| row.metrics.value(m, WeekType::ThisWeek);
    let bench = |m: Metric| row.metrics.value(m, WeekType::Benchmark);

    format!(
        "CPM: {:.2} vs {:.2}, VTR: {:.2} vs {:.2}, CompletionRate: {:.2} vs {:.2}, CPCV: {:.2} vs {:.2}",
        this(Metric::Cpm),
        bench(Metric::Cpm),
        this(Metric::Vtr),
        bench(Metric::Vtr),
        this(Metric::CompletionRate),
        bench(Metric::CompletionRate),
        this(Metric::Cpcv),
        bench(Metric::Cpcv),
    )
}

/// Percentage change of `this_week` against `last_week`, or `None` when the
/// last-week value is zero and the change is undefined.
fn pct_change(row: &WideRow, metric: Metric) -> Option<f64> {
    let last = row.metrics.value(metric, WeekType::LastWeek);
    if last == 0.0 {
        return None;
    }
    let this = row.metrics.value(metric, WeekType::ThisWeek);
    Some((this - last) / last * 100.0)
}

/// Classify the row from the CPM/CPC week-over-week swings. A zero
/// last-week denominator yields a fixed no-baseline message instead of an
/// unguarded division; the row is kept either way.
pub fn actionable_insight(row: &WideRow) -> String {
    let (cpm_change, cpc_change) = match (pct_change(row, Metric::Cpm), pct_change(row, Metric::Cpc)) {
        (Some(cpm), Some(cpc)) => (cpm, cpc),
        _ => {
            warn!(
                campaign = %row.context.campaign,
                week_start = %row.context.week_start,
                "last-week CPM/CPC is zero, skipping change classification"
            );
            return INSIGHT_NO_BASELINE.to_string();
        }
    };

    if cpm_change.abs() > CHANGE_THRESHOLD_PCT || cpc_change.abs() > CHANGE_THRESHOLD_PCT {
        INSIGHT_NEEDS_OPTIMIZATION.to_string()
    } else {
        INSIGHT_STABLE.to_string()
    }
}

/// Fill the three derived fields on every row. No row is dropped.
pub fn enrich_rows(rows: &mut [WideRow]) {
    for row in rows.iter_mut() {
        row.last_week_comparison = last_week_comparison(row);
        row.benchmark_comparison = benchmark_comparison(row);
        row.actionable_insights_based_on_last_week = actionable_insight(row);
    }
}

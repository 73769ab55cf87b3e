//! Spend/views/impressions totals grouped by a caller-chosen dimension,
//! feeding the daily view's bubble chart.

use crate::filter::Filterable;
use crate::types::DailyRecord;
use adlens_core::{DashboardError, DashboardResult};
use serde::Serialize;
use std::collections::HashMap;

/// One bubble: a dimension value with its summed delivery totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BubblePoint {
    pub group: String,
    pub spend: u64,
    pub views: u64,
    pub impressions: u64,
}

/// Sum spend, views, and impressions per distinct value of `dimension`
/// (typically `campaign` or `platform`), sorted by group name.
pub fn aggregate_daily(rows: &[DailyRecord], dimension: &str) -> DashboardResult<Vec<BubblePoint>> {
    let mut totals: HashMap<String, (u64, u64, u64)> = HashMap::new();

    for row in rows {
        let group = row
            .field(dimension)
            .ok_or_else(|| DashboardError::UnknownDimension(dimension.to_string()))?;
        let entry = totals.entry(group).or_insert((0, 0, 0));
        entry.0 += row.spend;
        entry.1 += row.views;
        entry.2 += row.impressions;
    }

    let mut points: Vec<BubblePoint> = totals
        .into_iter()
        .map(|(group, (spend, views, impressions))| BubblePoint {
            group,
            spend,
            views,
            impressions,
        })
        .collect();
    points.sort_by(|a, b| a.group.cmp(&b.group));
    Ok(points)
}

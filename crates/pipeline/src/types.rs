//! Domain model for the dashboard pipeline: campaign identity, metric
//! observations (long format), and the pivoted wide performance row.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Advertising performance metrics tracked per campaign-week. Values are
/// opaque to the pipeline — they arrive from a metric source and are only
/// reshaped and compared, never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "CPM")]
    Cpm,
    #[serde(rename = "CPC")]
    Cpc,
    #[serde(rename = "CPV")]
    Cpv,
    #[serde(rename = "VTR")]
    Vtr,
    CompletionRate,
    #[serde(rename = "CPCV")]
    Cpcv,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Cpm,
        Metric::Cpc,
        Metric::Cpv,
        Metric::Vtr,
        Metric::CompletionRate,
        Metric::Cpcv,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Cpm => "CPM",
            Metric::Cpc => "CPC",
            Metric::Cpv => "CPV",
            Metric::Vtr => "VTR",
            Metric::CompletionRate => "CompletionRate",
            Metric::Cpcv => "CPCV",
        }
    }
}

/// Temporal reference axis for a metric value: the current week, the prior
/// week, or the long-run benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekType {
    ThisWeek,
    LastWeek,
    Benchmark,
}

impl WeekType {
    pub const ALL: [WeekType; 3] = [WeekType::ThisWeek, WeekType::LastWeek, WeekType::Benchmark];

    pub fn label(&self) -> &'static str {
        match self {
            WeekType::ThisWeek => "this_week",
            WeekType::LastWeek => "last_week",
            WeekType::Benchmark => "benchmark",
        }
    }
}

/// Flattened column name for a pivoted cell, e.g. `CPM_this_week`.
pub fn column_name(metric: Metric, week_type: WeekType) -> String {
    format!("{}_{}", metric.label(), week_type.label())
}

/// Identity of one campaign-week plus its qualitative annotations. The full
/// field set (annotations included) is the pivot group key, so annotations
/// survive the long/wide round trip intact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignContext {
    pub week_start: NaiveDate,
    pub month: String,
    pub campaign: String,
    pub brand: String,
    pub category: String,
    pub objective: String,
    pub platform: String,
    pub going_well: String,
    pub need_improvement: String,
    pub continue_monitoring: String,
}

/// One long-format observation: (context, metric, week_type, value).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricObservation {
    #[serde(flatten)]
    pub context: CampaignContext,
    pub metric: Metric,
    pub week_type: WeekType,
    pub value: f64,
}

/// The three temporal values of a single metric within one wide row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricCells {
    pub this_week: f64,
    pub last_week: f64,
    pub benchmark: f64,
}

impl MetricCells {
    pub fn get(&self, week_type: WeekType) -> f64 {
        match week_type {
            WeekType::ThisWeek => self.this_week,
            WeekType::LastWeek => self.last_week,
            WeekType::Benchmark => self.benchmark,
        }
    }
}

/// Complete grid of pivoted cells for one row: every (metric, week_type)
/// pair is present by construction, so downstream arithmetic never meets a
/// missing value. Built only by the pivoter, which errors on gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGrid {
    cells: [MetricCells; Metric::ALL.len()],
}

impl MetricGrid {
    pub(crate) fn new(cells: [MetricCells; Metric::ALL.len()]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, metric: Metric) -> &MetricCells {
        &self.cells[metric as usize]
    }

    pub fn value(&self, metric: Metric, week_type: WeekType) -> f64 {
        self.cell(metric).get(week_type)
    }
}

// Serialized as the flattened `{metric}_{week_type}` columns so a wide row
// renders as one flat record.
impl Serialize for MetricGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Metric::ALL.len() * WeekType::ALL.len()))?;
        for metric in Metric::ALL {
            for week_type in WeekType::ALL {
                map.serialize_entry(&column_name(metric, week_type), &self.value(metric, week_type))?;
            }
        }
        map.end()
    }
}

/// One wide performance row: context identity, the full pivoted metric grid,
/// and the three derived narrative fields filled in by the insight stage.
#[derive(Debug, Clone, Serialize)]
pub struct WideRow {
    #[serde(flatten)]
    pub context: CampaignContext,
    #[serde(flatten)]
    pub metrics: MetricGrid,
    pub last_week_comparison: String,
    pub benchmark_comparison: String,
    pub actionable_insights_based_on_last_week: String,
}

/// One raw daily-delivery record, consumed by the daily view as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    pub month: String,
    pub campaign: String,
    pub brand: String,
    pub category: String,
    pub objective: String,
    pub platform: String,
    pub spend: u64,
    pub views: u64,
    pub impressions: u64,
    pub clicks: u64,
}

//! Campaign analytics pipeline — metric expansion, long/wide pivoting,
//! derived insight fields, budget pacing, and the filtering/aggregation
//! semantics behind the dashboard's three views.

pub mod aggregate;
pub mod expand;
pub mod filter;
pub mod insights;
pub mod pacing;
pub mod pivot;
pub mod sample;
pub mod types;
pub mod view;

pub use aggregate::{aggregate_daily, BubblePoint};
pub use expand::{expand_metrics, MetricSource, SimulatedMetricSource};
pub use filter::{Filterable, RowFilter};
pub use insights::enrich_rows;
pub use pacing::{compute_pacing, compute_pacing_batch, PacingRecord, PacingReport};
pub use pivot::pivot_observations;
pub use sample::SampleData;
pub use types::{CampaignContext, DailyRecord, Metric, MetricObservation, WeekType, WideRow};
pub use view::{daily_view, pacing_view, weekly_view, DailyView, PacingView, WeeklyView};

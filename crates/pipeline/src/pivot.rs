//! Aggregator/pivoter — collapses long-format observations back into one
//! wide row per campaign-week identity.

use crate::types::{
    column_name, CampaignContext, Metric, MetricCells, MetricGrid, MetricObservation, WeekType,
    WideRow,
};
use adlens_core::{DashboardError, DashboardResult};
use std::collections::HashMap;

/// Per-group accumulator: every cell starts absent so duplicates and gaps
/// are both detectable.
type CellBuffer = [[Option<f64>; WeekType::ALL.len()]; Metric::ALL.len()];

/// Pivot long-format observations into wide rows, grouped by the full
/// context identity (annotations included) in first-seen order.
///
/// The pivot is total: the expander guarantees full (metric, week_type)
/// coverage, and this function refuses to paper over a violation. A
/// duplicate cell or a missing cell is an explicit error, never a silent
/// null — downstream insight arithmetic divides by these values.
pub fn pivot_observations(observations: &[MetricObservation]) -> DashboardResult<Vec<WideRow>> {
    let mut order: Vec<CampaignContext> = Vec::new();
    let mut groups: HashMap<CampaignContext, CellBuffer> = HashMap::new();

    for obs in observations {
        let buffer = groups.entry(obs.context.clone()).or_insert_with(|| {
            order.push(obs.context.clone());
            [[None; WeekType::ALL.len()]; Metric::ALL.len()]
        });

        let cell = &mut buffer[obs.metric as usize][obs.week_type as usize];
        if cell.is_some() {
            return Err(DashboardError::DuplicateObservation {
                campaign: obs.context.campaign.clone(),
                week_start: obs.context.week_start,
                column: column_name(obs.metric, obs.week_type),
            });
        }
        *cell = Some(obs.value);
    }

    let mut rows = Vec::with_capacity(order.len());
    for context in order {
        let buffer = &groups[&context];
        let mut cells = [MetricCells::default(); Metric::ALL.len()];

        for metric in Metric::ALL {
            for week_type in WeekType::ALL {
                match buffer[metric as usize][week_type as usize] {
                    Some(value) => match week_type {
                        WeekType::ThisWeek => cells[metric as usize].this_week = value,
                        WeekType::LastWeek => cells[metric as usize].last_week = value,
                        WeekType::Benchmark => cells[metric as usize].benchmark = value,
                    },
                    None => {
                        return Err(DashboardError::MissingPivotCell {
                            campaign: context.campaign.clone(),
                            week_start: context.week_start,
                            column: column_name(metric, week_type),
                        });
                    }
                }
            }
        }

        rows.push(WideRow {
            context,
            metrics: MetricGrid::new(cells),
            last_week_comparison: String::new(),
            benchmark_comparison: String::new(),
            actionable_insights_based_on_last_week: String::new(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::{expand_metrics, SimulatedMetricSource};
    use chrono::NaiveDate;

    fn make_context(campaign: &str, week: u32) -> CampaignContext {
        CampaignContext {
            week_start: NaiveDate::from_ymd_opt(2023, 1, week).unwrap(),
            month: "Jan".into(),
            campaign: campaign.into(),
            brand: "Brand X".into(),
            category: "Fashion".into(),
            objective: "Engagement".into(),
            platform: "Instagram".into(),
            going_well: "Strong Impressions".into(),
            need_improvement: "Low Conversion".into(),
            continue_monitoring: "Moderate Engagement".into(),
        }
    }

    #[test]
    fn test_one_row_per_context_in_input_order() {
        let contexts = vec![
            make_context("Campaign B", 1),
            make_context("Campaign A", 8),
            make_context("Campaign C", 15),
        ];
        let mut source = SimulatedMetricSource::seeded(3);
        let observations = expand_metrics(&contexts, &mut source);

        let rows = pivot_observations(&observations).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].context.campaign, "Campaign B");
        assert_eq!(rows[1].context.campaign, "Campaign A");
        assert_eq!(rows[2].context.campaign, "Campaign C");
    }

    #[test]
    fn test_context_identity_round_trips() {
        let contexts = vec![make_context("Campaign A", 1)];
        let mut source = SimulatedMetricSource::seeded(9);
        let observations = expand_metrics(&contexts, &mut source);

        let rows = pivot_observations(&observations).unwrap();
        assert_eq!(rows[0].context, contexts[0]);
    }

    #[test]
    fn test_cell_values_land_in_the_right_column() {
        let context = make_context("Campaign A", 1);
        let mut observations = Vec::new();
        for (i, metric) in Metric::ALL.into_iter().enumerate() {
            for (j, week_type) in WeekType::ALL.into_iter().enumerate() {
                observations.push(MetricObservation {
                    context: context.clone(),
                    metric,
                    week_type,
                    value: (i * 10 + j) as f64,
                });
            }
        }

        let rows = pivot_observations(&observations).unwrap();
        assert_eq!(rows[0].metrics.value(Metric::Cpm, WeekType::ThisWeek), 0.0);
        assert_eq!(rows[0].metrics.value(Metric::Cpc, WeekType::Benchmark), 12.0);
        assert_eq!(rows[0].metrics.value(Metric::Cpcv, WeekType::LastWeek), 51.0);
    }

    #[test]
    fn test_missing_cell_is_an_error() {
        let contexts = vec![make_context("Campaign A", 1)];
        let mut source = SimulatedMetricSource::seeded(5);
        let mut observations = expand_metrics(&contexts, &mut source);
        observations.pop();

        let err = pivot_observations(&observations).unwrap_err();
        assert!(matches!(err, DashboardError::MissingPivotCell { .. }));
        assert!(err.to_string().contains("CPCV_benchmark"));
    }

    #[test]
    fn test_duplicate_observation_is_an_error() {
        let contexts = vec![make_context("Campaign A", 1)];
        let mut source = SimulatedMetricSource::seeded(5);
        let mut observations = expand_metrics(&contexts, &mut source);
        observations.push(observations[0].clone());

        let err = pivot_observations(&observations).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateObservation { .. }));
    }
}

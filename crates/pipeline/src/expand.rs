//! Metric expander — turns one wide campaign-week context into long-format
//! observations, one per (metric, week_type) pair.

use crate::types::{CampaignContext, Metric, MetricObservation, WeekType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the numeric value for one (context, metric, week_type) cell.
///
/// The pipeline only guarantees the *shape* of the expansion (full cross
/// product, no missing pair); where the values come from is the source's
/// business. Production deployments put a real metrics feed behind this
/// trait; tests and the demo dataset use [`SimulatedMetricSource`].
pub trait MetricSource {
    fn value(&mut self, context: &CampaignContext, metric: Metric, week_type: WeekType) -> f64;
}

/// Seeded simulated metric source. Benchmarks draw from a wider band than
/// weekly figures so benchmark comparisons stay interesting.
pub struct SimulatedMetricSource {
    rng: StdRng,
}

impl SimulatedMetricSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MetricSource for SimulatedMetricSource {
    fn value(&mut self, _context: &CampaignContext, _metric: Metric, week_type: WeekType) -> f64 {
        let range = match week_type {
            WeekType::Benchmark => 50.0..200.0,
            WeekType::ThisWeek => 80.0..120.0,
            WeekType::LastWeek => 70.0..130.0,
        };
        self.rng.gen_range(range)
    }
}

/// Expand each context into `|metrics| × |week_types|` observations, in
/// declaration order. Pure reshaping; the output length is always
/// `contexts.len() * 18`.
pub fn expand_metrics(
    contexts: &[CampaignContext],
    source: &mut dyn MetricSource,
) -> Vec<MetricObservation> {
    let mut observations =
        Vec::with_capacity(contexts.len() * Metric::ALL.len() * WeekType::ALL.len());

    for context in contexts {
        for metric in Metric::ALL {
            for week_type in WeekType::ALL {
                observations.push(MetricObservation {
                    context: context.clone(),
                    metric,
                    week_type,
                    value: source.value(context, metric, week_type),
                });
            }
        }
    }

    observations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn make_context(campaign: &str) -> CampaignContext {
        CampaignContext {
            week_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            month: "Jan".into(),
            campaign: campaign.into(),
            brand: "Brand X".into(),
            category: "Electronics".into(),
            objective: "Awareness".into(),
            platform: "YouTube".into(),
            going_well: "High CTR".into(),
            need_improvement: "High CPC".into(),
            continue_monitoring: "Avg Reach".into(),
        }
    }

    #[test]
    fn test_full_cross_product_per_context() {
        let contexts = vec![make_context("Campaign A"), make_context("Campaign B")];
        let mut source = SimulatedMetricSource::seeded(7);

        let observations = expand_metrics(&contexts, &mut source);
        assert_eq!(observations.len(), 2 * 18);

        for context in &contexts {
            let pairs: HashSet<(Metric, WeekType)> = observations
                .iter()
                .filter(|o| &o.context == context)
                .map(|o| (o.metric, o.week_type))
                .collect();
            assert_eq!(pairs.len(), 18, "no duplicate (metric, week_type) pair");
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let contexts = vec![make_context("Campaign A")];

        let mut first = SimulatedMetricSource::seeded(42);
        let mut second = SimulatedMetricSource::seeded(42);
        let a = expand_metrics(&contexts, &mut first);
        let b = expand_metrics(&contexts, &mut second);

        let values_a: Vec<f64> = a.iter().map(|o| o.value).collect();
        let values_b: Vec<f64> = b.iter().map(|o| o.value).collect();
        assert_eq!(values_a, values_b);
    }

    #[test]
    fn test_simulated_ranges() {
        let contexts = vec![make_context("Campaign A"); 20];
        let mut source = SimulatedMetricSource::seeded(1);

        for obs in expand_metrics(&contexts, &mut source) {
            let (lo, hi) = match obs.week_type {
                WeekType::Benchmark => (50.0, 200.0),
                WeekType::ThisWeek => (80.0, 120.0),
                WeekType::LastWeek => (70.0, 130.0),
            };
            assert!(obs.value >= lo && obs.value < hi);
        }
    }
}

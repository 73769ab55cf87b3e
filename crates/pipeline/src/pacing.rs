//! Pacing calculator — expected vs. actual spend over a campaign's budget
//! lifecycle.

use adlens_core::{DashboardError, DashboardResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One campaign's budget/time inputs for pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingRecord {
    pub month: String,
    pub campaign: String,
    pub brand: String,
    pub category: String,
    pub objective: String,
    pub platform: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_left: i64,
    pub plan_budget: f64,
    pub current_spend: f64,
    /// Reported by the delivery platform; passed through for display only.
    pub yesterday_spend: f64,
}

/// A pacing record augmented with the derived delivery-pacing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingReport {
    #[serde(flatten)]
    pub record: PacingRecord,
    pub total_days: i64,
    pub days_passed: i64,
    pub expected_spend: f64,
    /// Spend against expectation, rounded and capped at 100.
    pub pacing_percent: f64,
    pub remaining_budget: f64,
    pub expected_daily_spend: f64,
}

/// A record rejected during batch pacing, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub campaign: String,
    pub reason: String,
}

/// Outcome of pacing a whole batch: bad records are skipped and reported,
/// never aborting the rest.
#[derive(Debug, Clone, Serialize)]
pub struct PacingOutcome {
    pub reports: Vec<PacingReport>,
    pub skipped: Vec<SkippedRecord>,
}

/// Derive the pacing fields for one record.
///
/// Total days are inclusive of both endpoints; days passed are floored at 1
/// so the expected-spend division is always defined. Pacing against a zero
/// expected spend (possible only with a zero plan budget) is defined as 0%
/// rather than an error. A campaign that ends before it starts is rejected.
pub fn compute_pacing(record: &PacingRecord) -> DashboardResult<PacingReport> {
    let total_days = (record.end_date - record.start_date).num_days() + 1;
    if total_days < 1 {
        return Err(DashboardError::InvalidDateRange {
            campaign: record.campaign.clone(),
            start: record.start_date,
            end: record.end_date,
        });
    }

    let days_passed = (total_days - record.day_left).max(1);
    let expected_spend = (record.plan_budget * days_passed as f64 / total_days as f64).round();

    let pacing_percent = if expected_spend == 0.0 {
        0.0
    } else {
        (record.current_spend / expected_spend * 100.0).round().min(100.0)
    };

    let remaining_budget = (record.plan_budget - record.current_spend).round();

    // When no days remain the whole remainder is due today.
    let expected_daily_spend = if record.day_left > 0 {
        (remaining_budget / record.day_left as f64).round()
    } else {
        remaining_budget
    };

    Ok(PacingReport {
        record: record.clone(),
        total_days,
        days_passed,
        expected_spend,
        pacing_percent,
        remaining_budget,
        expected_daily_spend,
    })
}

/// Pace every record in the batch, skipping and reporting invalid ones.
pub fn compute_pacing_batch(records: &[PacingRecord]) -> PacingOutcome {
    let mut reports = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        match compute_pacing(record) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!(campaign = %record.campaign, error = %e, "skipping pacing record");
                skipped.push(SkippedRecord {
                    campaign: record.campaign.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    PacingOutcome { reports, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> PacingRecord {
        PacingRecord {
            month: "Jul".into(),
            campaign: "Campaign A".into(),
            brand: "Brand X".into(),
            category: "Electronics".into(),
            objective: "Awareness".into(),
            platform: "YouTube".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 19).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
            day_left: 4,
            plan_budget: 1_332_929.0,
            current_spend: 0.0,
            yesterday_spend: 0.0,
        }
    }

    // 1. Reference arithmetic ----------------------------------------------

    #[test]
    fn test_reference_campaign() {
        let report = compute_pacing(&make_record()).unwrap();

        assert_eq!(report.total_days, 44);
        assert_eq!(report.days_passed, 40);
        assert_eq!(report.expected_spend, 1_211_754.0);
        assert_eq!(report.pacing_percent, 0.0);
        assert_eq!(report.remaining_budget, 1_332_929.0);
        assert_eq!(report.expected_daily_spend, 333_232.0);
    }

    #[test]
    fn test_pacing_capped_at_100() {
        let mut record = make_record();
        record.current_spend = 2_000_000.0; // far beyond expected spend
        let report = compute_pacing(&record).unwrap();
        assert_eq!(report.pacing_percent, 100.0);
    }

    #[test]
    fn test_zero_plan_budget_paces_at_zero() {
        let mut record = make_record();
        record.plan_budget = 0.0;
        let report = compute_pacing(&record).unwrap();
        assert_eq!(report.expected_spend, 0.0);
        assert_eq!(report.pacing_percent, 0.0);
    }

    // 2. Degenerate day counts ----------------------------------------------

    #[test]
    fn test_zero_day_left_due_today() {
        let mut record = make_record();
        record.day_left = 0;
        record.current_spend = 300_000.0;
        let report = compute_pacing(&record).unwrap();
        assert_eq!(report.expected_daily_spend, report.remaining_budget);
    }

    #[test]
    fn test_days_passed_floored_at_one() {
        let mut record = make_record();
        record.day_left = 44; // nothing elapsed yet
        let report = compute_pacing(&record).unwrap();
        assert_eq!(report.days_passed, 1);
        assert!(report.expected_spend > 0.0);
    }

    #[test]
    fn test_single_day_campaign() {
        let mut record = make_record();
        record.end_date = record.start_date;
        record.day_left = 0;
        let report = compute_pacing(&record).unwrap();
        assert_eq!(report.total_days, 1);
        assert_eq!(report.days_passed, 1);
    }

    // 3. Validation and batch semantics -------------------------------------

    #[test]
    fn test_end_before_start_rejected() {
        let mut record = make_record();
        record.end_date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let err = compute_pacing(&record).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDateRange { .. }));
        assert!(err.to_string().contains("Campaign A"));
    }

    #[test]
    fn test_batch_skips_and_reports_bad_records() {
        let good = make_record();
        let mut bad = make_record();
        bad.campaign = "Campaign B".into();
        bad.end_date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let outcome = compute_pacing_batch(&[good, bad]);
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].campaign, "Campaign B");
        assert!(outcome.skipped[0].reason.contains("before it starts"));
    }
}

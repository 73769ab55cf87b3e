//! Seeded sample tables standing in for the real data feed: daily delivery
//! records, weekly campaign contexts, and the pacing monitor's budget table.

use crate::pacing::PacingRecord;
use crate::types::{CampaignContext, DailyRecord};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MONTHS: [&str; 4] = ["Jan", "Feb", "Mar", "Apr"];
const DAILY_CAMPAIGNS: [&str; 3] = ["Campaign A", "Campaign B", "Campaign C"];
const WEEKLY_CAMPAIGNS: [&str; 2] = ["Campaign A", "Campaign B"];
const BRANDS: [&str; 2] = ["Brand X", "Brand Y"];
const CATEGORIES: [&str; 2] = ["Electronics", "Fashion"];
const DAILY_OBJECTIVES: [&str; 3] = ["Awareness", "Engagement", "Conversion"];
const WEEKLY_OBJECTIVES: [&str; 2] = ["Awareness", "Engagement"];
const DAILY_PLATFORMS: [&str; 3] = ["YouTube", "Facebook", "Instagram"];
const WEEKLY_PLATFORMS: [&str; 2] = ["YouTube", "Instagram"];
const GOING_WELL: [&str; 2] = ["High CTR", "Strong Impressions"];
const NEED_IMPROVEMENT: [&str; 2] = ["Low Conversion", "High CPC"];
const CONTINUE_MONITORING: [&str; 2] = ["Avg Reach", "Moderate Engagement"];

/// The three in-memory source tables the views recompute from.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub daily: Vec<DailyRecord>,
    pub weekly: Vec<CampaignContext>,
    pub pacing: Vec<PacingRecord>,
}

impl SampleData {
    /// Generate the source tables from a fixed seed so every render of the
    /// same configuration sees the same data.
    pub fn generate(seed: u64, daily_rows: usize, weekly_rows: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            daily: generate_daily(&mut rng, daily_rows),
            weekly: generate_weekly(&mut rng, weekly_rows),
            pacing: pacing_table(),
        }
    }
}

fn pick(rng: &mut StdRng, items: &[&str]) -> String {
    items[rng.gen_range(0..items.len())].to_string()
}

fn generate_daily(rng: &mut StdRng, rows: usize) -> Vec<DailyRecord> {
    (0..rows)
        .map(|_| DailyRecord {
            month: pick(rng, &MONTHS),
            campaign: pick(rng, &DAILY_CAMPAIGNS),
            brand: pick(rng, &BRANDS),
            category: pick(rng, &CATEGORIES),
            objective: pick(rng, &DAILY_OBJECTIVES),
            platform: pick(rng, &DAILY_PLATFORMS),
            spend: rng.gen_range(1_000..10_000),
            views: rng.gen_range(10_000..100_000),
            impressions: rng.gen_range(5_000..100_000),
            clicks: rng.gen_range(100..10_000),
        })
        .collect()
}

fn generate_weekly(rng: &mut StdRng, rows: usize) -> Vec<CampaignContext> {
    let first_week = date(2023, 1, 1);
    (0..rows)
        .map(|i| CampaignContext {
            week_start: first_week + Duration::weeks(i as i64),
            month: pick(rng, &MONTHS),
            campaign: pick(rng, &WEEKLY_CAMPAIGNS),
            brand: pick(rng, &BRANDS),
            category: pick(rng, &CATEGORIES),
            objective: pick(rng, &WEEKLY_OBJECTIVES),
            platform: pick(rng, &WEEKLY_PLATFORMS),
            going_well: pick(rng, &GOING_WELL),
            need_improvement: pick(rng, &NEED_IMPROVEMENT),
            continue_monitoring: pick(rng, &CONTINUE_MONITORING),
        })
        .collect()
}

/// The pacing monitor's fixed budget table. Pacing itself is always derived
/// from these inputs, never stored.
fn pacing_table() -> Vec<PacingRecord> {
    #[allow(clippy::type_complexity)]
    let rows: [(
        (i32, u32, u32),
        (i32, u32, u32),
        &str,
        &str,
        &str,
        &str,
        &str,
        &str,
        i64,
        f64,
        f64,
        f64,
    ); 12] = [
        ((2025, 7, 19), (2025, 8, 31), "Jul", "Campaign A", "Brand X", "Electronics", "Awareness", "YouTube", 4, 1_332_929.0, 0.0, 0.0),
        ((2025, 7, 6), (2025, 9, 30), "Aug", "Campaign B", "Brand Y", "Fashion", "Engagement", "Instagram", 34, 700_097_080.0, 36_664_910.0, 7_355_271.0),
        ((2025, 7, 10), (2025, 9, 15), "Jul", "Campaign C", "Brand Z", "Automotive", "Conversions", "Facebook", 20, 5_000_000.0, 1_200_000.0, 40_000.0),
        ((2025, 7, 15), (2025, 9, 20), "Jul", "Campaign D", "Brand X", "Beauty", "Awareness", "TikTok", 15, 3_500_000.0, 2_000_000.0, 150_000.0),
        ((2025, 7, 20), (2025, 9, 25), "Aug", "Campaign E", "Brand Y", "Food", "Engagement", "YouTube", 25, 4_000_000.0, 1_800_000.0, 60_000.0),
        ((2025, 7, 25), (2025, 9, 30), "Aug", "Campaign F", "Brand Z", "Electronics", "Conversions", "Instagram", 10, 2_500_000.0, 500_000.0, 55_000.0),
        ((2025, 8, 1), (2025, 10, 5), "Aug", "Campaign G", "Brand X", "Fashion", "Awareness", "Facebook", 18, 7_000_000.0, 3_500_000.0, 200_000.0),
        ((2025, 8, 5), (2025, 10, 10), "Aug", "Campaign H", "Brand Y", "Automotive", "Engagement", "TikTok", 12, 6_000_000.0, 2_000_000.0, 180_000.0),
        ((2025, 8, 10), (2025, 10, 15), "Aug", "Campaign I", "Brand Z", "Beauty", "Conversions", "YouTube", 8, 8_000_000.0, 4_000_000.0, 190_000.0),
        ((2025, 8, 15), (2025, 10, 20), "Aug", "Campaign J", "Brand X", "Food", "Awareness", "Instagram", 22, 9_000_000.0, 5_000_000.0, 210_000.0),
        ((2025, 8, 20), (2025, 10, 25), "Aug", "Campaign K", "Brand Y", "Electronics", "Engagement", "Facebook", 30, 5_500_000.0, 2_750_000.0, 90_000.0),
        ((2025, 8, 25), (2025, 10, 30), "Aug", "Campaign L", "Brand Z", "Fashion", "Conversions", "TikTok", 14, 4_500_000.0, 1_500_000.0, 95_000.0),
    ];

    rows.into_iter()
        .map(
            |(start, end, month, campaign, brand, category, objective, platform, day_left, plan_budget, current_spend, yesterday_spend)| {
                PacingRecord {
                    month: month.to_string(),
                    campaign: campaign.to_string(),
                    brand: brand.to_string(),
                    category: category.to_string(),
                    objective: objective.to_string(),
                    platform: platform.to_string(),
                    start_date: date(start.0, start.1, start.2),
                    end_date: date(end.0, end.1, end.2),
                    day_left,
                    plan_budget,
                    current_spend,
                    yesterday_spend,
                }
            },
        )
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded date is valid")
}

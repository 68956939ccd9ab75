use super::weekly::WeeklyRecord;
use serde::Serialize;
use std::collections::HashMap;

/// How many products each ranking direction keeps.
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct TrendRanking {
    /// Latest-week rows sorted by trend score, best first.
    pub rising: Vec<WeeklyRecord>,
    /// Latest-week rows sorted by trend score, worst first.
    pub falling: Vec<WeeklyRecord>,
}

/// Trend-score band, used to label ranked products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    RapidGrowth,
    Growing,
    Stable,
    Declining,
    RapidDecline,
}

impl TrendDirection {
    pub fn classify(trend_score: f64, growth_threshold: f64, rapid_threshold: f64) -> Self {
        if trend_score > rapid_threshold {
            TrendDirection::RapidGrowth
        } else if trend_score > growth_threshold {
            TrendDirection::Growing
        } else if trend_score < -rapid_threshold {
            TrendDirection::RapidDecline
        } else if trend_score < -growth_threshold {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::RapidGrowth => "Rapid Growth",
            TrendDirection::Growing => "Growing",
            TrendDirection::Stable => "Stable",
            TrendDirection::Declining => "Declining",
            TrendDirection::RapidDecline => "Rapid Decline",
        }
    }
}

/// Restrict the weekly table to each product's most recent week.
///
/// Rows are stable-sorted by week ascending and the last row per product is
/// kept in frame order, so tie handling downstream inherits a deterministic
/// order from the weekly table's (product, week) sort.
pub fn latest_per_product(weekly: &[WeeklyRecord]) -> Vec<WeeklyRecord> {
    let mut by_week: Vec<WeeklyRecord> = weekly.to_vec();
    by_week.sort_by(|a, b| a.week.cmp(&b.week));

    let mut last_seen: HashMap<String, usize> = HashMap::new();
    for (idx, record) in by_week.iter().enumerate() {
        last_seen.insert(record.product.clone(), idx);
    }

    let mut keep: Vec<usize> = last_seen.into_values().collect();
    keep.sort_unstable();
    keep.into_iter().map(|idx| by_week[idx].clone()).collect()
}

/// Rank products by the trend score of their most recent week, keeping the
/// ten strongest risers and ten steepest fallers.
pub fn find_trending(weekly: &[WeeklyRecord]) -> TrendRanking {
    find_trending_top(weekly, DEFAULT_TOP_N)
}

/// [`find_trending`] with an explicit per-direction limit. Fewer than
/// `top_n` distinct products yields shorter lists. Both sorts are stable,
/// so tied scores keep the latest-set order.
pub fn find_trending_top(weekly: &[WeeklyRecord], top_n: usize) -> TrendRanking {
    let latest = latest_per_product(weekly);

    let mut rising = latest.clone();
    rising.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));
    rising.truncate(top_n);

    let mut falling = latest;
    falling.sort_by(|a, b| a.trend_score.total_cmp(&b.trend_score));
    falling.truncate(top_n);

    TrendRanking { rising, falling }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-day range selected in the dashboard filter.
/// Absence of either bound means "no filtering".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// True when the range cannot restrict anything (either bound missing)
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() || self.to.is_none()
    }

    /// Inclusive day containment; an unbounded range contains every day
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => day >= from && day <= to,
            _ => true,
        }
    }
}

/// Plain sums of every numeric `CampaignRow` field over the filtered set.
/// Absent optional counters contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSums {
    pub spend: f64,
    pub impressions: i64,
    pub clicks: i64,
    pub page_views: i64,
    pub leads: i64,
    pub cart_adds: i64,
    pub checkouts_started: i64,
    pub purchases: i64,
    pub revenue: f64,
}

/// Sums plus the derived ratios. Every ratio denominator is guarded:
/// division by zero yields 0.0, never an error or infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignTotals {
    pub sums: MetricSums,
    /// Cost per lead: spend / leads
    pub cpl: f64,
    /// Cost per click: spend / clicks
    pub cpc: f64,
    /// Lead conversion rate: leads / page views
    pub lead_conversion: f64,
    /// Cost per acquisition: spend / purchases
    pub cpa: f64,
    /// Return on ad spend: revenue / spend
    pub roas: f64,
    /// Return on investment:
    /// (revenue - spend - operational cost) / (spend + operational cost)
    pub roi: f64,
    /// Average order value: revenue / purchases
    pub avg_order_value: f64,
}

/// Which metric pair a per-day series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesMetric {
    /// value = leads for the day, ratio = CPL for the day
    LeadsAndCpl,
    /// value = revenue for the day, ratio = ROAS for the day
    RevenueAndRoas,
}

/// Which counter a per-campaign rollup sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollupMetric {
    Leads,
    Revenue,
}

/// One point of the per-day series. Days with no rows are not synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub day: NaiveDate,
    pub value: f64,
    pub ratio: f64,
}

/// Per-campaign rollup entry. Output order is not part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSlice {
    pub campaign_name: String,
    pub total: f64,
}

/// One funnel stage with its relative bar width against the first stage,
/// already clamped to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub label: String,
    pub value: i64,
    pub width_percent: f64,
}

/// The full recomputed dashboard model for one business type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub totals: CampaignTotals,
    pub daily: Vec<DailyPoint>,
    pub by_campaign: Vec<CampaignSlice>,
    pub funnel: Vec<FunnelStage>,
}

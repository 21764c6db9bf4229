//! Campaign performance dashboard: the aggregation pipeline that turns raw
//! daily campaign rows into totals, derived ratios, per-day series,
//! per-campaign rollups and a funnel.
//!
//! Everything here is pure and synchronous; the frontend recomputes it on
//! every change of the filtered input, the date range or the operational
//! cost figure.

pub mod analytics;
pub mod dto;

pub use analytics::{campaign_rollup, daily_series, filter_rows, funnel_stages, ratio};
pub use dto::{
    CampaignPerformance, CampaignSlice, CampaignTotals, DailyPoint, DateRange, FunnelStage,
    MetricSums, RollupMetric, SeriesMetric,
};

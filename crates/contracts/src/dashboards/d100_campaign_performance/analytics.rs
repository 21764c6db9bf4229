use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::a001_client::BusinessType;
use crate::domain::a002_campaign_data::CampaignRow;

use super::dto::{
    CampaignPerformance, CampaignSlice, CampaignTotals, DailyPoint, DateRange, FunnelStage,
    MetricSums, RollupMetric, SeriesMetric,
};

/// Guarded division: 0.0 whenever the denominator is not positive.
/// Every derived ratio in this module goes through here.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Restrict `rows` to the inclusive `[from, to]` calendar-day range,
/// preserving the original order. Identity when either bound is absent.
pub fn filter_rows(rows: &[CampaignRow], range: &DateRange) -> Vec<CampaignRow> {
    if range.is_unbounded() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect()
}

impl MetricSums {
    /// Single pass over the filtered rows; absent optional counters sum as 0.
    pub fn from_rows(rows: &[CampaignRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, r| {
            acc.spend += r.spend;
            acc.impressions += r.impressions;
            acc.clicks += r.clicks;
            acc.page_views += r.page_views;
            acc.leads += r.leads.unwrap_or(0);
            acc.cart_adds += r.cart_adds.unwrap_or(0);
            acc.checkouts_started += r.checkouts_started.unwrap_or(0);
            acc.purchases += r.purchases.unwrap_or(0);
            acc.revenue += r.revenue.unwrap_or(0.0);
            acc
        })
    }
}

impl CampaignTotals {
    /// Sums plus derived ratios. `operational_cost` is the manually entered
    /// figure from the dashboard filter (0 when the field is empty).
    ///
    /// ROI uses the same guard as every other ratio: 0 when
    /// spend + operational cost is 0. The numerator may be negative, so a
    /// loss shows as a negative ROI rather than being clamped.
    pub fn from_rows(rows: &[CampaignRow], operational_cost: f64) -> Self {
        let sums = MetricSums::from_rows(rows);
        Self {
            cpl: ratio(sums.spend, sums.leads as f64),
            cpc: ratio(sums.spend, sums.clicks as f64),
            lead_conversion: ratio(sums.leads as f64, sums.page_views as f64),
            cpa: ratio(sums.spend, sums.purchases as f64),
            roas: ratio(sums.revenue, sums.spend),
            roi: ratio(
                sums.revenue - sums.spend - operational_cost,
                sums.spend + operational_cost,
            ),
            avg_order_value: ratio(sums.revenue, sums.purchases as f64),
            sums,
        }
    }
}

/// Group `rows` by calendar day, in first-seen order of distinct days,
/// summing the selected metric and spend, then derive the per-day ratio.
pub fn daily_series(rows: &[CampaignRow], metric: SeriesMetric) -> Vec<DailyPoint> {
    let mut order: Vec<NaiveDate> = Vec::new();
    let mut acc: HashMap<NaiveDate, (f64, f64)> = HashMap::new();

    for r in rows {
        let entry = acc.entry(r.date).or_insert_with(|| {
            order.push(r.date);
            (0.0, 0.0)
        });
        entry.0 += match metric {
            SeriesMetric::LeadsAndCpl => r.leads.unwrap_or(0) as f64,
            SeriesMetric::RevenueAndRoas => r.revenue.unwrap_or(0.0),
        };
        entry.1 += r.spend;
    }

    order
        .into_iter()
        .map(|day| {
            let (value, spend) = acc[&day];
            let day_ratio = match metric {
                SeriesMetric::LeadsAndCpl => ratio(spend, value),
                SeriesMetric::RevenueAndRoas => ratio(value, spend),
            };
            DailyPoint {
                day,
                value,
                ratio: day_ratio,
            }
        })
        .collect()
}

/// Group `rows` by campaign name, summing the selected counter.
/// One entry per distinct name present in the filtered set.
pub fn campaign_rollup(rows: &[CampaignRow], metric: RollupMetric) -> Vec<CampaignSlice> {
    let mut order: Vec<String> = Vec::new();
    let mut acc: HashMap<String, f64> = HashMap::new();

    for r in rows {
        let entry = acc.entry(r.campaign_name.clone()).or_insert_with(|| {
            order.push(r.campaign_name.clone());
            0.0
        });
        *entry += match metric {
            RollupMetric::Leads => r.leads.unwrap_or(0) as f64,
            RollupMetric::Revenue => r.revenue.unwrap_or(0.0),
        };
    }

    order
        .into_iter()
        .map(|campaign_name| {
            let total = acc[&campaign_name];
            CampaignSlice {
                campaign_name,
                total,
            }
        })
        .collect()
}

/// Fixed four-stage funnel from already-computed sums. Each stage's bar
/// width is its share of the first stage, clamped to [0, 100]; all widths
/// are 0 when the first stage is 0.
pub fn funnel_stages(business_type: BusinessType, sums: &MetricSums) -> Vec<FunnelStage> {
    let stages: [(&str, i64); 4] = match business_type {
        BusinessType::LeadGen => [
            ("Impressões", sums.impressions),
            ("Cliques", sums.clicks),
            ("Visitas", sums.page_views),
            ("Leads", sums.leads),
        ],
        BusinessType::Ecommerce => [
            ("Visitas", sums.page_views),
            ("Carrinho", sums.cart_adds),
            ("Checkout", sums.checkouts_started),
            ("Compras", sums.purchases),
        ],
    };

    let first = stages[0].1;
    stages
        .into_iter()
        .map(|(label, value)| {
            let width_percent = if first > 0 {
                (value as f64 / first as f64 * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            FunnelStage {
                label: label.to_string(),
                value,
                width_percent,
            }
        })
        .collect()
}

impl CampaignPerformance {
    /// Build the full dashboard model. The business type is dispatched once
    /// here; each arm picks its series and rollup metric, and the funnel
    /// shape follows the same variant.
    pub fn build(
        business_type: BusinessType,
        rows: &[CampaignRow],
        range: &DateRange,
        operational_cost: f64,
    ) -> Self {
        let filtered = filter_rows(rows, range);
        let totals = CampaignTotals::from_rows(&filtered, operational_cost);

        let (series_metric, rollup_metric) = match business_type {
            BusinessType::LeadGen => (SeriesMetric::LeadsAndCpl, RollupMetric::Leads),
            BusinessType::Ecommerce => (SeriesMetric::RevenueAndRoas, RollupMetric::Revenue),
        };

        Self {
            daily: daily_series(&filtered, series_metric),
            by_campaign: campaign_rollup(&filtered, rollup_metric),
            funnel: funnel_stages(business_type, &totals.sums),
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn row(d: u32, campaign: &str) -> CampaignRow {
        CampaignRow {
            date: day(d),
            campaign_name: campaign.to_string(),
            ad_set_name: "Conjunto 1".to_string(),
            ad_name: "Anuncio X".to_string(),
            spend: 0.0,
            impressions: 0,
            clicks: 0,
            page_views: 0,
            leads: None,
            cart_adds: None,
            checkouts_started: None,
            purchases: None,
            revenue: None,
        }
    }

    fn lead_row(d: u32, campaign: &str, spend: f64, leads: i64) -> CampaignRow {
        CampaignRow {
            spend,
            leads: Some(leads),
            ..row(d, campaign)
        }
    }

    fn ecom_row(d: u32, campaign: &str, spend: f64, revenue: f64) -> CampaignRow {
        CampaignRow {
            spend,
            revenue: Some(revenue),
            ..row(d, campaign)
        }
    }

    #[test]
    fn filter_without_bounds_is_identity() {
        let rows = vec![lead_row(1, "A", 10.0, 1), lead_row(5, "B", 20.0, 2)];
        assert_eq!(filter_rows(&rows, &DateRange::default()), rows);
        // a single bound is still "no filtering"
        let half_open = DateRange::new(Some(day(2)), None);
        assert_eq!(filter_rows(&rows, &half_open), rows);
    }

    #[test]
    fn filter_is_inclusive_and_order_preserving() {
        let rows = vec![
            lead_row(1, "A", 1.0, 1),
            lead_row(2, "B", 1.0, 1),
            lead_row(3, "A", 1.0, 1),
            lead_row(4, "C", 1.0, 1),
        ];
        let range = DateRange::new(Some(day(2)), Some(day(3)));
        let filtered = filter_rows(&rows, &range);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, day(2));
        assert_eq!(filtered[1].date, day(3));
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = vec![
            lead_row(1, "A", 1.0, 1),
            lead_row(3, "B", 1.0, 1),
            lead_row(6, "C", 1.0, 1),
        ];
        let range = DateRange::new(Some(day(2)), Some(day(6)));
        let once = filter_rows(&rows, &range);
        let twice = filter_rows(&once, &range);
        assert_eq!(once, twice);
    }

    #[test]
    fn totals_single_row_scenario() {
        let rows = vec![CampaignRow {
            spend: 100.0,
            clicks: 50,
            page_views: 40,
            leads: Some(10),
            ..row(1, "A")
        }];
        let totals = CampaignTotals::from_rows(&rows, 0.0);
        assert_eq!(totals.sums.spend, 100.0);
        assert_eq!(totals.cpl, 10.0);
        assert_eq!(totals.cpc, 2.0);
        assert_eq!(totals.lead_conversion, 0.25);
    }

    #[test]
    fn totals_guard_zero_purchases_and_revenue() {
        let rows = vec![CampaignRow {
            spend: 100.0,
            purchases: Some(0),
            revenue: Some(0.0),
            ..row(1, "A")
        }];
        let totals = CampaignTotals::from_rows(&rows, 0.0);
        assert_eq!(totals.cpa, 0.0);
        assert_eq!(totals.roas, 0.0);
        assert_eq!(totals.avg_order_value, 0.0);
        assert!(totals.cpa.is_finite());
    }

    #[test]
    fn totals_guard_zero_leads() {
        let rows = vec![CampaignRow {
            spend: 250.0,
            ..row(1, "A")
        }];
        let totals = CampaignTotals::from_rows(&rows, 0.0);
        assert_eq!(totals.cpl, 0.0);
        assert!(!totals.cpl.is_nan());
    }

    #[test]
    fn roi_guard_and_sign() {
        // no spend, no operational cost: guarded to 0
        let totals = CampaignTotals::from_rows(&[], 0.0);
        assert_eq!(totals.roi, 0.0);

        // loss stays negative, not clamped
        let rows = vec![CampaignRow {
            spend: 100.0,
            revenue: Some(50.0),
            ..row(1, "A")
        }];
        let totals = CampaignTotals::from_rows(&rows, 100.0);
        assert_eq!(totals.roi, (50.0 - 100.0 - 100.0) / 200.0);
        assert!(totals.roi < 0.0);
    }

    #[test]
    fn operational_cost_only_affects_roi() {
        let rows = vec![CampaignRow {
            spend: 100.0,
            revenue: Some(300.0),
            purchases: Some(2),
            ..row(1, "A")
        }];
        let base = CampaignTotals::from_rows(&rows, 0.0);
        let with_cost = CampaignTotals::from_rows(&rows, 50.0);
        assert_eq!(base.roas, with_cost.roas);
        assert_eq!(base.cpa, with_cost.cpa);
        assert_eq!(base.roi, 2.0);
        assert_eq!(with_cost.roi, 1.0);
    }

    #[test]
    fn daily_series_partitions_leads_sum() {
        let rows = vec![
            lead_row(1, "A", 50.0, 5),
            lead_row(1, "B", 30.0, 3),
            lead_row(2, "A", 20.0, 2),
        ];
        let series = daily_series(&rows, SeriesMetric::LeadsAndCpl);
        let totals = CampaignTotals::from_rows(&rows, 0.0);

        assert_eq!(series.len(), 2);
        let series_sum: f64 = series.iter().map(|p| p.value).sum();
        assert_eq!(series_sum, totals.sums.leads as f64);

        // per-day CPL is the day's spend over the day's leads
        assert_eq!(series[0].day, day(1));
        assert_eq!(series[0].value, 8.0);
        assert_eq!(series[0].ratio, 10.0);
    }

    #[test]
    fn daily_series_partitions_revenue_sum() {
        let rows = vec![
            ecom_row(1, "A", 50.0, 200.0),
            ecom_row(2, "A", 25.0, 100.0),
            ecom_row(2, "B", 25.0, 50.0),
        ];
        let series = daily_series(&rows, SeriesMetric::RevenueAndRoas);
        let totals = CampaignTotals::from_rows(&rows, 0.0);

        let series_sum: f64 = series.iter().map(|p| p.value).sum();
        assert_eq!(series_sum, totals.sums.revenue);
        assert_eq!(series[1].ratio, 3.0);
    }

    #[test]
    fn daily_series_preserves_first_seen_day_order() {
        // rows arrive out of calendar order; the series must not re-sort them
        let rows = vec![
            lead_row(5, "A", 1.0, 1),
            lead_row(2, "A", 1.0, 1),
            lead_row(5, "B", 1.0, 1),
            lead_row(9, "A", 1.0, 1),
        ];
        let series = daily_series(&rows, SeriesMetric::LeadsAndCpl);
        let days: Vec<NaiveDate> = series.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![day(5), day(2), day(9)]);
    }

    #[test]
    fn daily_series_guards_zero_leads_day() {
        let rows = vec![lead_row(1, "A", 40.0, 0)];
        let series = daily_series(&rows, SeriesMetric::LeadsAndCpl);
        assert_eq!(series[0].ratio, 0.0);
        assert!(!series[0].ratio.is_infinite());
    }

    #[test]
    fn campaign_rollup_partitions_grand_total() {
        let rows = vec![
            lead_row(1, "A", 1.0, 5),
            lead_row(2, "B", 1.0, 3),
            lead_row(3, "A", 1.0, 2),
        ];
        let rollup = campaign_rollup(&rows, RollupMetric::Leads);
        let totals = CampaignTotals::from_rows(&rows, 0.0);

        assert_eq!(rollup.len(), 2);
        let rollup_sum: f64 = rollup.iter().map(|s| s.total).sum();
        assert_eq!(rollup_sum, totals.sums.leads as f64);

        let a = rollup.iter().find(|s| s.campaign_name == "A").unwrap();
        assert_eq!(a.total, 7.0);
    }

    #[test]
    fn funnel_lead_gen_stages_and_widths() {
        let sums = MetricSums {
            impressions: 1000,
            clicks: 100,
            page_views: 80,
            leads: 8,
            ..MetricSums::default()
        };
        let funnel = funnel_stages(BusinessType::LeadGen, &sums);
        let labels: Vec<&str> = funnel.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Impressões", "Cliques", "Visitas", "Leads"]);
        assert_eq!(funnel[0].width_percent, 100.0);
        assert_eq!(funnel[1].width_percent, 10.0);
        assert!(funnel
            .iter()
            .all(|s| s.width_percent >= 0.0 && s.width_percent <= 100.0));
    }

    #[test]
    fn funnel_ecommerce_stages() {
        let sums = MetricSums {
            page_views: 200,
            cart_adds: 40,
            checkouts_started: 20,
            purchases: 10,
            ..MetricSums::default()
        };
        let funnel = funnel_stages(BusinessType::Ecommerce, &sums);
        let labels: Vec<&str> = funnel.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Visitas", "Carrinho", "Checkout", "Compras"]);
        assert_eq!(funnel[3].width_percent, 5.0);
    }

    #[test]
    fn funnel_empty_first_stage_yields_zero_widths() {
        let funnel = funnel_stages(BusinessType::LeadGen, &MetricSums::default());
        assert!(funnel.iter().all(|s| s.width_percent == 0.0));
    }

    #[test]
    fn excluding_range_yields_empty_model() {
        let rows = vec![lead_row(1, "A", 100.0, 10), lead_row(2, "B", 50.0, 5)];
        let range = DateRange::new(Some(day(20)), Some(day(25)));
        let perf = CampaignPerformance::build(BusinessType::LeadGen, &rows, &range, 0.0);

        assert_eq!(perf.totals.sums, MetricSums::default());
        assert_eq!(perf.totals.cpl, 0.0);
        assert!(perf.daily.is_empty());
        assert!(perf.by_campaign.is_empty());
        assert!(perf.funnel.iter().all(|s| s.value == 0));
    }

    #[test]
    fn build_dispatches_metric_pair_by_business_type() {
        let rows = vec![CampaignRow {
            spend: 100.0,
            leads: Some(10),
            revenue: Some(400.0),
            ..row(1, "A")
        }];
        let lead = CampaignPerformance::build(
            BusinessType::LeadGen,
            &rows,
            &DateRange::default(),
            0.0,
        );
        let ecom = CampaignPerformance::build(
            BusinessType::Ecommerce,
            &rows,
            &DateRange::default(),
            0.0,
        );

        assert_eq!(lead.daily[0].value, 10.0); // leads
        assert_eq!(lead.daily[0].ratio, 10.0); // CPL
        assert_eq!(ecom.daily[0].value, 400.0); // revenue
        assert_eq!(ecom.daily[0].ratio, 4.0); // ROAS
        assert_eq!(lead.funnel[3].label, "Leads");
        assert_eq!(ecom.funnel[3].label, "Compras");
    }
}

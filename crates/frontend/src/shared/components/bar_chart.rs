use contracts::dashboards::d100_campaign_performance::CampaignSlice;
use leptos::prelude::*;

use super::number_format::format_number_with_decimals;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_X: f64 = 24.0;
const PAD_Y: f64 = 26.0;

/// Vertical bar chart: one bar per campaign.
#[component]
pub fn BarChart(slices: Vec<CampaignSlice>, label: &'static str) -> impl IntoView {
    if slices.is_empty() {
        return view! {
            <div class="chart chart--empty">"Sem dados no período selecionado"</div>
        }
        .into_any();
    }

    let n = slices.len();
    let max_total = slices.iter().map(|s| s.total).fold(0.0_f64, f64::max);

    let slot = (WIDTH - 2.0 * PAD_X) / n as f64;
    let bar_width = (slot * 0.6).min(80.0);
    let plot_height = HEIGHT - 2.0 * PAD_Y;

    let bars = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let height = if max_total > 0.0 {
                plot_height * (s.total / max_total)
            } else {
                0.0
            };
            let center = PAD_X + slot * (i as f64 + 0.5);
            let x = format!("{:.1}", center - bar_width / 2.0);
            let y = format!("{:.1}", HEIGHT - PAD_Y - height);
            let w = format!("{:.1}", bar_width);
            let h = format!("{:.1}", height);
            let value_x = format!("{:.1}", center);
            let value_y = format!("{:.1}", HEIGHT - PAD_Y - height - 6.0);
            let name_x = format!("{:.1}", center);
            let name_y = format!("{:.1}", HEIGHT - 6.0);

            view! {
                <rect class="chart__bar" x=x y=y width=w height=h rx="3" />
                <text class="chart__tick" x=value_x y=value_y text-anchor="middle">
                    {format_number_with_decimals(s.total, 0)}
                </text>
                <text class="chart__tick" x=name_x y=name_y text-anchor="middle">
                    {s.campaign_name.clone()}
                </text>
            }
        })
        .collect_view();

    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let baseline_y = format!("{:.1}", HEIGHT - PAD_Y);

    view! {
        <div class="chart">
            <svg viewBox=view_box class="chart__svg">
                <line
                    class="chart__gridline"
                    x1="0"
                    y1=baseline_y.clone()
                    x2=format!("{:.1}", WIDTH)
                    y2=baseline_y
                />
                {bars}
            </svg>
            <div class="chart__legend">
                <span class="chart__legend-item chart__legend-item--value">{label}</span>
            </div>
        </div>
    }
    .into_any()
}

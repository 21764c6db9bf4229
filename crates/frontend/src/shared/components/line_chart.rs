use contracts::dashboards::d100_campaign_performance::DailyPoint;
use leptos::prelude::*;

use super::number_format::format_number_with_decimals;
use crate::shared::date_utils::format_day_short;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_X: f64 = 48.0;
const PAD_Y: f64 = 26.0;

fn x_at(i: usize, n: usize) -> f64 {
    if n <= 1 {
        WIDTH / 2.0
    } else {
        PAD_X + (WIDTH - 2.0 * PAD_X) * i as f64 / (n - 1) as f64
    }
}

fn y_at(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        HEIGHT - PAD_Y
    } else {
        HEIGHT - PAD_Y - (HEIGHT - 2.0 * PAD_Y) * (value / max)
    }
}

fn polyline_points(points: &[DailyPoint], pick: impl Fn(&DailyPoint) -> f64, max: f64) -> String {
    let n = points.len();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i, n), y_at(pick(p), max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dual-axis line chart for a per-day series: the summed metric on the
/// left axis, its derived ratio on the right.
#[component]
pub fn LineChart(
    points: Vec<DailyPoint>,
    label_value: &'static str,
    label_ratio: &'static str,
) -> impl IntoView {
    if points.is_empty() {
        return view! {
            <div class="chart chart--empty">"Sem dados no período selecionado"</div>
        }
        .into_any();
    }

    let n = points.len();
    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let max_ratio = points.iter().map(|p| p.ratio).fold(0.0_f64, f64::max);

    let value_points = polyline_points(&points, |p| p.value, max_value);
    let ratio_points = polyline_points(&points, |p| p.ratio, max_ratio);

    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let grid_x1 = format!("{:.1}", PAD_X);
    let grid_x2 = format!("{:.1}", WIDTH - PAD_X);

    // Horizontal gridlines at quarters of the plot height
    let gridlines = (0..=4)
        .map(|i| {
            let y = format!("{:.1}", PAD_Y + (HEIGHT - 2.0 * PAD_Y) * i as f64 / 4.0);
            let x1 = grid_x1.clone();
            let x2 = grid_x2.clone();
            view! {
                <line class="chart__gridline" x1=x1 y1=y.clone() x2=x2 y2=y />
            }
        })
        .collect_view();

    // At most ~8 day labels along the x axis
    let step = n.div_ceil(8).max(1);
    let label_y = format!("{:.1}", HEIGHT - 6.0);
    let x_labels = points
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, p)| {
            let x = format!("{:.1}", x_at(i, n));
            view! {
                <text class="chart__tick" x=x y=label_y.clone() text-anchor="middle">
                    {format_day_short(p.day)}
                </text>
            }
        })
        .collect_view();

    let axis_y = format!("{:.1}", PAD_Y);
    let axis_right_x = format!("{:.1}", WIDTH - 4.0);

    view! {
        <div class="chart">
            <svg viewBox=view_box class="chart__svg">
                {gridlines}
                <polyline class="chart__line chart__line--value" fill="none" points=value_points />
                <polyline class="chart__line chart__line--ratio" fill="none" points=ratio_points />
                <text class="chart__tick" x="4" y=axis_y.clone() text-anchor="start">
                    {format_number_with_decimals(max_value, 0)}
                </text>
                <text class="chart__tick" x=axis_right_x y=axis_y text-anchor="end">
                    {format_number_with_decimals(max_ratio, 2)}
                </text>
                {x_labels}
            </svg>
            <div class="chart__legend">
                <span class="chart__legend-item chart__legend-item--value">{label_value}</span>
                <span class="chart__legend-item chart__legend-item--ratio">{label_ratio}</span>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, value: f64, ratio: f64) -> DailyPoint {
        DailyPoint {
            day: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            value,
            ratio,
        }
    }

    #[test]
    fn scales_into_plot_area() {
        assert_eq!(y_at(0.0, 100.0), HEIGHT - PAD_Y);
        assert_eq!(y_at(100.0, 100.0), PAD_Y);
        // zero max collapses to the baseline instead of dividing by zero
        assert_eq!(y_at(5.0, 0.0), HEIGHT - PAD_Y);
    }

    #[test]
    fn polyline_has_one_pair_per_point() {
        let points = vec![point(1, 10.0, 1.0), point(2, 20.0, 2.0), point(3, 0.0, 0.0)];
        let rendered = polyline_points(&points, |p| p.value, 20.0);
        assert_eq!(rendered.split(' ').count(), 3);
    }
}

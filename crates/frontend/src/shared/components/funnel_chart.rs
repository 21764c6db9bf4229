use contracts::dashboards::d100_campaign_performance::FunnelStage;
use leptos::prelude::*;

use super::number_format::format_number_int;

/// Conversion funnel: one labeled bar per stage, width already computed
/// (and clamped) relative to the first stage.
#[component]
pub fn FunnelChart(stages: Vec<FunnelStage>) -> impl IntoView {
    let bars = stages
        .into_iter()
        .map(|stage| {
            let width_style = format!("width: {:.1}%;", stage.width_percent);
            view! {
                <div class="funnel__stage">
                    <div class="funnel__stage-header">
                        <span>{stage.label}</span>
                        <span class="funnel__stage-value">
                            {format_number_int(stage.value as f64)}
                        </span>
                    </div>
                    <div class="funnel__track">
                        <div class="funnel__bar" style=width_style></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="funnel">{bars}</div> }
}

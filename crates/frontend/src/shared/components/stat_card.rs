use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

use super::number_format::{format_number_int, format_number_with_decimals, format_percent};

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            format!("{} {}", currency, format_number_with_decimals(val, 2))
        }
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => format_percent(val, *decimals),
        ValueFormat::Integer => format_number_int(val),
    }
}

/// KPI card: label on top, formatted value below. The whole KPI grid is
/// re-rendered by its parent when the totals memo changes, so the props
/// are plain values.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Metric value
    value: f64,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(optional)]
    status: Option<IndicatorStatus>,
) -> impl IntoView {
    let status_class = match status.unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = format_value(value, &format);

    view! {
        <div class=status_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_kind() {
        assert_eq!(format_value(1234.5, &ValueFormat::brl()), "R$ 1.234,50");
        assert_eq!(format_value(0.25, &ValueFormat::Percent { decimals: 2 }), "25,00%");
        assert_eq!(format_value(3.456, &ValueFormat::Number { decimals: 2 }), "3,46");
        assert_eq!(format_value(1500.0, &ValueFormat::Integer), "1.500");
    }
}

use chrono::{Datelike, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{month_bounds, previous_month};

/// DateRangePicker — reusable period filter: two date inputs plus quick
/// actions (previous month, current month, clear). Empty inputs mean
/// "no filtering".
#[component]
pub fn DateRangePicker(
    /// "From" date in yyyy-mm-dd format ("" = unbounded)
    #[prop(into)]
    date_from: Signal<String>,

    /// "To" date in yyyy-mm-dd format ("" = unbounded)
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback fired with (from, to) on any change
    on_change: Callback<(String, String)>,

    /// Optional label above the control
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = {
        let on_change = on_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_change.run((new_from, current_to));
        }
    };

    let on_to_change = {
        let on_change = on_change.clone();
        move |new_to: String| {
            let current_from = date_from.get_untracked();
            on_change.run((current_from, new_to));
        }
    };

    // Snap to the current calendar month
    let on_current_month = {
        let on_change = on_change.clone();
        move |_| {
            let now = Utc::now().date_naive();
            if let Some((start, end)) = month_bounds(now.year(), now.month()) {
                on_change.run((
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ));
            }
        }
    };

    // Step back one month from the current "from" bound (or from today
    // when the range is unbounded)
    let on_previous_month = {
        let on_change = on_change.clone();
        move |_| {
            let anchor = NaiveDate::parse_from_str(&date_from.get_untracked(), "%Y-%m-%d")
                .unwrap_or_else(|_| Utc::now().date_naive());
            let (year, month) = previous_month(anchor.year(), anchor.month());
            if let Some((start, end)) = month_bounds(year, month) {
                on_change.run((
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ));
            }
        }
    };

    let on_clear = {
        let on_change = on_change.clone();
        move |_| {
            on_change.run((String::new(), String::new()));
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <div class="date-range-picker__actions">
                    <ButtonGroup>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_previous_month(())
                        >
                            "-1M"
                        </Button>

                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_current_month(())
                        >
                            "0M"
                        </Button>

                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_clear(())
                        >
                            "×"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>
    }
}

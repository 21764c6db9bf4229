//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"d100_campaign_performance--dashboard"`
//!   - `data-page-category`  — one of the categories below

use leptos::prelude::*;

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
pub const PAGE_CAT_SYSTEM: &str = "system";
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=base_class data-page-category=category>
            {children()}
        </div>
    }
}

use chrono::NaiveDate;
use contracts::dashboards::d100_campaign_performance::{
    campaign_rollup, daily_series, filter_rows, funnel_stages, CampaignTotals, DateRange,
    RollupMetric, SeriesMetric,
};
use contracts::domain::a001_client::{BusinessType, Client};
use contracts::domain::a002_campaign_data::CampaignRow;
use contracts::shared::errors::PageError;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_client::api as client_api;
use crate::domain::a001_client::ui::business_type_options;
use crate::domain::a002_campaign_data::api as campaign_api;
use crate::shared::components::bar_chart::BarChart;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::funnel_chart::FunnelChart;
use crate::shared::components::line_chart::LineChart;
use crate::shared::components::number_format::{format_money, format_number_int};
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Input, Select};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::context::use_auth;

fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// KPI cards for one business type, in display order.
fn kpi_cards(
    business_type: BusinessType,
    totals: &CampaignTotals,
) -> Vec<(&'static str, f64, ValueFormat, IndicatorStatus)> {
    let sums = &totals.sums;
    match business_type {
        BusinessType::LeadGen => vec![
            (
                "Investimento Total",
                sums.spend,
                ValueFormat::brl(),
                IndicatorStatus::Neutral,
            ),
            (
                "Leads Gerados",
                sums.leads as f64,
                ValueFormat::Integer,
                IndicatorStatus::Neutral,
            ),
            ("CPL", totals.cpl, ValueFormat::brl(), IndicatorStatus::Neutral),
            (
                "Cliques",
                sums.clicks as f64,
                ValueFormat::Integer,
                IndicatorStatus::Neutral,
            ),
            ("CPC", totals.cpc, ValueFormat::brl(), IndicatorStatus::Neutral),
            (
                "Visualizações de Página",
                sums.page_views as f64,
                ValueFormat::Integer,
                IndicatorStatus::Neutral,
            ),
            (
                "Taxa de Conversão de Leads",
                totals.lead_conversion,
                ValueFormat::Percent { decimals: 2 },
                IndicatorStatus::Neutral,
            ),
        ],
        BusinessType::Ecommerce => {
            let roi_status = if totals.roi > 0.0 {
                IndicatorStatus::Good
            } else if totals.roi < 0.0 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Neutral
            };
            vec![
                (
                    "Investimento Total",
                    sums.spend,
                    ValueFormat::brl(),
                    IndicatorStatus::Neutral,
                ),
                (
                    "Faturamento Total",
                    sums.revenue,
                    ValueFormat::brl(),
                    IndicatorStatus::Neutral,
                ),
                (
                    "ROAS",
                    totals.roas,
                    ValueFormat::Number { decimals: 2 },
                    IndicatorStatus::Neutral,
                ),
                (
                    "ROI",
                    totals.roi,
                    ValueFormat::Percent { decimals: 2 },
                    roi_status,
                ),
                (
                    "Vendas Totais",
                    sums.purchases as f64,
                    ValueFormat::Integer,
                    IndicatorStatus::Neutral,
                ),
                ("CPA", totals.cpa, ValueFormat::brl(), IndicatorStatus::Neutral),
                (
                    "Ticket Médio",
                    totals.avg_order_value,
                    ValueFormat::brl(),
                    IndicatorStatus::Neutral,
                ),
            ]
        }
    }
}

/// Client dashboard: loads the linked client and its row collection once
/// per visit (and on every auth-state change), then derives everything
/// else synchronously from signals. A superseded fetch simply resolves
/// and overwrites state — last write wins.
#[component]
pub fn CampaignDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let client = RwSignal::new(None::<Client>);
    let rows = RwSignal::new(Vec::<CampaignRow>::new());
    let loading = RwSignal::new(false);
    let page_error = RwSignal::new(None::<PageError>);

    // Filter state
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let operational_cost = RwSignal::new(String::new());
    let business_type = RwSignal::new(BusinessType::LeadGen);

    // Fetch on mount and whenever the session changes
    Effect::new(move |_| {
        let state = auth_state.get();
        if state.restoring {
            return;
        }
        let Some(user) = state.user else {
            page_error.set(Some(PageError::AuthenticationRequired));
            return;
        };

        loading.set(true);
        page_error.set(None);

        spawn_local(async move {
            match client_api::fetch_client_for_user(user.id).await {
                Ok(Some(found)) => {
                    business_type.set(found.business_type);
                    match campaign_api::list_campaign_rows(found.id).await {
                        Ok(data) => {
                            rows.set(data);
                            client.set(Some(found));
                        }
                        Err(e) => {
                            log::error!("Failed to load campaign data: {}", e);
                            page_error.set(Some(PageError::Fetch(e)));
                        }
                    }
                }
                Ok(None) => page_error.set(Some(PageError::ClientNotFound)),
                Err(e) => {
                    log::error!("Failed to load client: {}", e);
                    page_error.set(Some(PageError::Fetch(e)));
                }
            }
            loading.set(false);
        });
    });

    // Derivations — all pure, recomputed when their inputs change
    let range = Memo::new(move |_| {
        DateRange::new(parse_day(&date_from.get()), parse_day(&date_to.get()))
    });
    let cost = Memo::new(move |_| {
        operational_cost
            .get()
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .unwrap_or(0.0)
    });
    let filtered = Memo::new(move |_| filter_rows(&rows.get(), &range.get()));
    let totals = Memo::new(move |_| CampaignTotals::from_rows(&filtered.get(), cost.get()));
    let daily = Memo::new(move |_| {
        let metric = match business_type.get() {
            BusinessType::LeadGen => SeriesMetric::LeadsAndCpl,
            BusinessType::Ecommerce => SeriesMetric::RevenueAndRoas,
        };
        daily_series(&filtered.get(), metric)
    });
    let by_campaign = Memo::new(move |_| {
        let metric = match business_type.get() {
            BusinessType::LeadGen => RollupMetric::Leads,
            BusinessType::Ecommerce => RollupMetric::Revenue,
        };
        campaign_rollup(&filtered.get(), metric)
    });
    let funnel = Memo::new(move |_| funnel_stages(business_type.get(), &totals.get().sums));

    let on_date_change = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
    });

    let client_title = move || {
        client
            .get()
            .map(|c| format!("Dashboard — {}", c.name))
            .unwrap_or_else(|| "Dashboard do Cliente".to_string())
    };

    view! {
        <PageFrame page_id="d100_campaign_performance--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2 class="page__title">{client_title}</h2>
            </div>

            <div class="dashboard__filters">
                <div class="card">
                    <DateRangePicker
                        date_from=Signal::derive(move || date_from.get())
                        date_to=Signal::derive(move || date_to.get())
                        on_change=on_date_change
                        label="Período".to_string()
                    />
                </div>
                <div class="card">
                    <Input
                        label="Custos Operacionais"
                        id="operational-costs"
                        input_type="number"
                        placeholder="0"
                        value=Signal::derive(move || operational_cost.get())
                        on_input=Callback::new(move |v| operational_cost.set(v))
                    />
                </div>
                <div class="card">
                    <Select
                        label="Tipo de Negócio"
                        id="business-type"
                        value=Signal::derive(move || business_type.get().as_str().to_string())
                        on_change=Callback::new(move |v: String| {
                            if let Some(bt) = BusinessType::parse(&v) {
                                business_type.set(bt);
                            }
                        })
                        options=Signal::derive(business_type_options)
                    />
                </div>
            </div>

            {move || page_error.get().map(|err| view! {
                <div class="alert alert--error">{err.to_string()}</div>
            })}

            {move || {
                if loading.get() {
                    Some(view! {
                        <div class="page__loading">"Carregando dados..."</div>
                    })
                } else {
                    None
                }
            }}

            <Show when=move || page_error.get().is_none()>
                <section class="dashboard__kpis">
                    {move || {
                        let totals = totals.get();
                        kpi_cards(business_type.get(), &totals)
                            .into_iter()
                            .map(|(label, value, format, status)| view! {
                                <StatCard
                                    label=label.to_string()
                                    value=value
                                    format=format
                                    status=status
                                />
                            })
                            .collect_view()
                    }}
                </section>

                <section class="dashboard__charts">
                    {move || {
                        let (title, label_value, label_ratio) = match business_type.get() {
                            BusinessType::LeadGen => {
                                ("Evolução de Leads e CPL", "Leads", "CPL")
                            }
                            BusinessType::Ecommerce => {
                                ("Evolução de Faturamento e ROAS", "Faturamento", "ROAS")
                            }
                        };
                        view! {
                            <div class="card">
                                <h3 class="card__title">{title}</h3>
                                <LineChart
                                    points=daily.get()
                                    label_value=label_value
                                    label_ratio=label_ratio
                                />
                            </div>
                        }
                    }}
                    {move || {
                        let title = match business_type.get() {
                            BusinessType::LeadGen => "Leads por Campanha",
                            BusinessType::Ecommerce => "Faturamento por Campanha",
                        };
                        let label = match business_type.get() {
                            BusinessType::LeadGen => "Leads",
                            BusinessType::Ecommerce => "Faturamento",
                        };
                        view! {
                            <div class="card">
                                <h3 class="card__title">{title}</h3>
                                <BarChart slices=by_campaign.get() label=label />
                            </div>
                        }
                    }}
                </section>

                <section class="card">
                    {move || {
                        let title = match business_type.get() {
                            BusinessType::LeadGen => "Funil de Conversão",
                            BusinessType::Ecommerce => "Funil de Vendas",
                        };
                        view! {
                            <h3 class="card__title">{title}</h3>
                            <FunnelChart stages=funnel.get() />
                        }
                    }}
                </section>

                <section class="card">
                    <h3 class="card__title">"Detalhamento"</h3>
                    <div class="table-scroll">
                        {move || match business_type.get() {
                            BusinessType::LeadGen => view! {
                                <LeadGenTable rows=filtered.get() />
                            }
                            .into_any(),
                            BusinessType::Ecommerce => view! {
                                <EcommerceTable rows=filtered.get() />
                            }
                            .into_any(),
                        }}
                    </div>
                </section>
            </Show>
        </PageFrame>
    }
}

#[component]
fn LeadGenTable(rows: Vec<CampaignRow>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Data"</th>
                    <th>"Campanha"</th>
                    <th>"Conjunto"</th>
                    <th>"Anúncio"</th>
                    <th class="table__cell--right">"Investimento"</th>
                    <th class="table__cell--right">"Impressões"</th>
                    <th class="table__cell--right">"Cliques"</th>
                    <th class="table__cell--right">"Visitas"</th>
                    <th class="table__cell--right">"Leads"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|r| view! {
                    <tr>
                        <td>{r.date.format("%d/%m/%Y").to_string()}</td>
                        <td>{r.campaign_name}</td>
                        <td>{r.ad_set_name}</td>
                        <td>{r.ad_name}</td>
                        <td class="table__cell--right">{format_money(r.spend)}</td>
                        <td class="table__cell--right">{format_number_int(r.impressions as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.clicks as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.page_views as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.leads.unwrap_or(0) as f64)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn EcommerceTable(rows: Vec<CampaignRow>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Data"</th>
                    <th>"Campanha"</th>
                    <th>"Conjunto"</th>
                    <th>"Anúncio"</th>
                    <th class="table__cell--right">"Investimento"</th>
                    <th class="table__cell--right">"Visitas"</th>
                    <th class="table__cell--right">"Carrinho"</th>
                    <th class="table__cell--right">"Checkout"</th>
                    <th class="table__cell--right">"Compras"</th>
                    <th class="table__cell--right">"Faturamento"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|r| view! {
                    <tr>
                        <td>{r.date.format("%d/%m/%Y").to_string()}</td>
                        <td>{r.campaign_name}</td>
                        <td>{r.ad_set_name}</td>
                        <td>{r.ad_name}</td>
                        <td class="table__cell--right">{format_money(r.spend)}</td>
                        <td class="table__cell--right">{format_number_int(r.page_views as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.cart_adds.unwrap_or(0) as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.checkouts_started.unwrap_or(0) as f64)}</td>
                        <td class="table__cell--right">{format_number_int(r.purchases.unwrap_or(0) as f64)}</td>
                        <td class="table__cell--right">{format_money(r.revenue.unwrap_or(0.0))}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

use crate::dashboards::d100_sales_overview::api;
use crate::dashboards::d100_sales_overview::ui::chart::SalesChart;
use crate::dashboards::d100_sales_overview::ui::disputed_table::DisputedOrdersTable;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::stat_card::StatCard;
use contracts::dashboards::d100_sales_overview::{
    DashboardSnapshot, DatasetBounds, DisputedOrdersResponse,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Matches the source dashboard's table page size
const PAGE_SIZE: usize = 10;

/// Sales Overview dashboard.
///
/// One date signal drives everything: changing the picker re-fetches the
/// snapshot (chart, summary cards, status shares) and the disputed-orders
/// table, and every widget re-renders from the fresh values. No slot
/// result is cached between changes.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let start_date = RwSignal::new(String::new());
    let bounds = RwSignal::new(None::<DatasetBounds>);
    let snapshot = RwSignal::new(None::<DashboardSnapshot>);
    let disputed = RwSignal::new(None::<DisputedOrdersResponse>);
    let page = RwSignal::new(0usize);
    let loading = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);

    // Load the dataset bounds on mount and seed the date signal with the
    // start of the dataset, like the source dashboard's initial date
    spawn_local(async move {
        match api::get_bounds().await {
            Ok(b) => {
                bounds.set(Some(b));
                start_date.set(b.min_date.format("%Y-%m-%d").to_string());
            }
            Err(err) => {
                log!("Failed to load dataset bounds: {}", err);
                error_msg.set(Some(err));
            }
        }
    });

    // Refetch the whole snapshot whenever the selected date changes
    Effect::new(move |_| {
        let date = start_date.get();
        if date.is_empty() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        spawn_local(async move {
            match api::get_snapshot(&date).await {
                Ok(data) => {
                    snapshot.set(Some(data));
                }
                Err(err) => {
                    error_msg.set(Some(err));
                }
            }
            loading.set(false);
        });
    });

    // Refetch the disputed-orders page whenever the date or page changes
    Effect::new(move |_| {
        let date = start_date.get();
        let current_page = page.get();
        if date.is_empty() {
            return;
        }

        spawn_local(async move {
            match api::get_disputed(&date, current_page, PAGE_SIZE).await {
                Ok(data) => {
                    disputed.set(Some(data));
                }
                Err(err) => {
                    log!("Failed to load disputed orders: {}", err);
                    error_msg.set(Some(err));
                }
            }
        });
    });

    let sales_total = Signal::derive(move || {
        snapshot.get().map(|s| s.sales_total_display)
    });
    let orders_total = Signal::derive(move || {
        snapshot.get().map(|s| s.orders_total.to_string())
    });
    let avg_sale = Signal::derive(move || {
        snapshot.get().map(|s| s.avg_sale_display)
    });
    let customer_count = Signal::derive(move || {
        snapshot.get().map(|s| s.customer_count.to_string())
    });
    let chart_series = Signal::derive(move || {
        snapshot.get().map(|s| s.chart).unwrap_or_default()
    });

    let min_date = Signal::derive(move || {
        bounds
            .get()
            .map(|b| b.min_date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let max_date = Signal::derive(move || {
        bounds
            .get()
            .map(|b| b.max_date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });

    let on_date_change = move |date: String| {
        // A new date starts the table over from the first page
        page.set(0);
        start_date.set(date);
    };

    let on_page_change = Callback::new(move |new_page: usize| {
        page.set(new_page);
    });

    // Colours follow the source dashboard: green / yellow / red
    let status_colors = ["#5faa0a", "#b7b212", "#c62f2f"];

    view! {
        <div id="d100_sales_overview--dashboard" class="d100-dashboard" style="padding: 16px;">
            <div class="page__header">
                <h2 style="margin: 0 0 12px 0;">"Sales Overview"</h2>
            </div>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error" style="margin-bottom: 12px; color: #c62828;">
                    <strong>"⚠ Error: "</strong>
                    {msg}
                </div>
            })}

            <div style="display: flex; gap: 12px; margin-bottom: 16px;">
                <StatCard label="Total Sales" value=sales_total />
                <StatCard label="Total Orders" value=orders_total />
                <StatCard label="Average Sale" value=avg_sale />
                <StatCard label="Customer Count" value=customer_count />
            </div>

            <div style="display: flex; gap: 16px; align-items: flex-start; margin-bottom: 16px;">
                <div style="flex: 1;">
                    <h3 style="margin: 0 0 8px 0;">"Sales per Month"</h3>
                    <SalesChart series=chart_series />

                    <div style="display: flex; align-items: center; gap: 8px; margin-top: 8px;">
                        <label style="font-weight: bold;">"Start Date"</label>
                        <DateInput
                            value=Signal::derive(move || start_date.get())
                            min=min_date
                            max=max_date
                            on_change=on_date_change
                        />
                        {move || if loading.get() {
                            Some(view! { <span style="color: #666;">"Loading..."</span> })
                        } else {
                            None
                        }}
                    </div>
                </div>

                <div class="stat-card" style="min-width: 220px;">
                    <div class="stat-card__label" style="font-weight: bold;">"Order Status"</div>
                    {move || {
                        snapshot.get().map(|s| {
                            s.status_shares.iter().enumerate().map(|(i, share)| {
                                let color = status_colors[i % status_colors.len()];
                                let style = format!("color: {}; font-weight: bold; padding: 6px 0;", color);
                                view! {
                                    <div style=style>{share.display.clone()}</div>
                                }
                            }).collect_view()
                        })
                    }}
                </div>
            </div>

            <DisputedOrdersTable data=Signal::derive(move || disputed.get()) on_page_change=on_page_change />
        </div>
    }
}

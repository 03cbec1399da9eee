use crate::dashboards::d100_sales_overview::ui::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single-page application: the overview dashboard is the whole UI
    view! {
        <SalesOverviewDashboard />
    }
}

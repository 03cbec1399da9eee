use crate::shared::components::pagination_controls::PaginationControls;
use contracts::dashboards::d100_sales_overview::DisputedOrdersResponse;
use leptos::prelude::*;

const TH_STYLE: &str = "border: 1px solid #ddd; padding: 8px; background: #f5f5f5; text-align: left;";
const TD_STYLE: &str = "border: 1px solid #ddd; padding: 8px;";

/// Paginated table of disputed and on-hold orders.
///
/// Rows arrive already filtered and sorted by the backend; this
/// component only renders the current page.
#[component]
pub fn DisputedOrdersTable(
    #[prop(into)] data: Signal<Option<DisputedOrdersResponse>>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let current_page = Signal::derive(move || data.get().map(|d| d.page).unwrap_or(0));
    let total_count =
        Signal::derive(move || data.get().map(|d| d.total_count as usize).unwrap_or(0));
    let total_pages = Signal::derive(move || {
        data.get()
            .map(|d| {
                let size = d.page_size.max(1);
                (d.total_count as usize + size - 1) / size
            })
            .unwrap_or(0)
    });

    view! {
        <div class="disputed-orders-table">
            <h3 style="margin: 0 0 8px 0;">"Disputed and On Hold Orders"</h3>

            {move || {
                let Some(response) = data.get() else {
                    return view! { <div>"Loading..."</div> }.into_any();
                };
                if response.items.is_empty() {
                    return view! {
                        <div style="padding: 12px; color: #666;">
                            "No disputed or on-hold orders after the selected date"
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <table class="data-table" style="width: 100%; border-collapse: collapse; margin: 0;">
                        <thead>
                            <tr>
                                <th style=TH_STYLE>"Order №"</th>
                                <th style=TH_STYLE>"Date"</th>
                                <th style=TH_STYLE>"Status"</th>
                                <th style=TH_STYLE>"Deal Size"</th>
                                <th style=TH_STYLE>"Customer"</th>
                                <th style=TH_STYLE>"Contact First Name"</th>
                                <th style=TH_STYLE>"Contact Last Name"</th>
                                <th style=TH_STYLE>"Phone"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {response.items.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td style=TD_STYLE>{row.order_number}</td>
                                        <td style=TD_STYLE>{row.order_date.format("%Y-%m-%d").to_string()}</td>
                                        <td style=TD_STYLE>{row.status.label()}</td>
                                        <td style=TD_STYLE>{row.deal_size.label()}</td>
                                        <td style=TD_STYLE>{row.customer_name}</td>
                                        <td style=TD_STYLE>{row.contact_first_name}</td>
                                        <td style=TD_STYLE>{row.contact_last_name}</td>
                                        <td style=TD_STYLE>{row.phone}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                on_page_change=on_page_change
            />
        </div>
    }
}

use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    DashboardSnapshot, DisputedOrderRow, MonthPoint, StatusShare,
};
use contracts::enums::OrderStatus;
use std::collections::HashSet;
use std::sync::Arc;

use super::dataset::SalesDataset;
use crate::shared::format;

/// Statuses surfaced as percentage cards, in display order
const STATUS_CARDS: [OrderStatus; 3] = [
    OrderStatus::Shipped,
    OrderStatus::InProcess,
    OrderStatus::Disputed,
];

/// Derives every output of the overview page from the read-only dataset
/// and the selected start date.
///
/// Each slot is a pure function of (dataset, date): no caching, no
/// interior state, nothing is mutated between evaluations. The summary
/// slots use a strict `>` comparison against the selected date while the
/// disputed table uses `>=`; the source dashboard behaves this way and
/// the asymmetry is kept on purpose.
#[derive(Debug, Clone)]
pub struct ViewGraph {
    dataset: Arc<SalesDataset>,
}

impl ViewGraph {
    pub fn new(dataset: Arc<SalesDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &SalesDataset {
        &self.dataset
    }

    /// Monthly sales series after the selected date, ascending by month.
    /// An empty result is valid and renders as a chart with no points.
    pub fn chart_series(&self, date: NaiveDate) -> Vec<MonthPoint> {
        self.dataset
            .monthly
            .iter()
            .filter(|point| point.month > date)
            .copied()
            .collect()
    }

    /// Sum of the monthly totals after the selected date.
    /// Derived from the monthly aggregate, so it always equals the sum
    /// of the chart series for the same date.
    pub fn sales_total(&self, date: NaiveDate) -> f64 {
        self.dataset
            .monthly
            .iter()
            .filter(|point| point.month > date)
            .map(|point| point.total)
            .sum()
    }

    /// Number of order lines dated after the selected date
    pub fn orders_total(&self, date: NaiveDate) -> u64 {
        self.dataset
            .orders
            .iter()
            .filter(|order| order.order_date > date)
            .count() as u64
    }

    /// Average sale; None when no orders fall after the selected date
    pub fn avg_sale(&self, date: NaiveDate) -> Option<f64> {
        let orders = self.orders_total(date);
        if orders == 0 {
            return None;
        }
        Some(self.sales_total(date) / orders as f64)
    }

    /// Distinct customer names among orders after the selected date
    pub fn customer_count(&self, date: NaiveDate) -> u64 {
        let customers: HashSet<&str> = self
            .dataset
            .orders
            .iter()
            .filter(|order| order.order_date > date)
            .map(|order| order.customer_name.as_str())
            .collect();
        customers.len() as u64
    }

    /// Share of one status among orders after the selected date, in
    /// percent; None when the filtered set is empty
    pub fn status_percentage(&self, date: NaiveDate, status: OrderStatus) -> Option<f64> {
        let mut matching = 0u64;
        let mut total = 0u64;
        for order in &self.dataset.orders {
            if order.order_date > date {
                total += 1;
                if order.status == status {
                    matching += 1;
                }
            }
        }
        if total == 0 {
            return None;
        }
        Some(matching as f64 / total as f64 * 100.0)
    }

    /// Disputed and on-hold order lines dated on or after the selected
    /// date, sorted descending by (order date, status label)
    pub fn disputed_rows(&self, date: NaiveDate) -> Vec<DisputedOrderRow> {
        let mut rows: Vec<DisputedOrderRow> = self
            .dataset
            .orders
            .iter()
            .filter(|order| order.status.is_disputed_or_on_hold() && order.order_date >= date)
            .map(|order| DisputedOrderRow {
                order_number: order.order_number,
                order_date: order.order_date,
                status: order.status,
                deal_size: order.deal_size,
                customer_name: order.customer_name.clone(),
                contact_first_name: order.contact_first_name.clone(),
                contact_last_name: order.contact_last_name.clone(),
                phone: order.phone.clone(),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then_with(|| b.status.label().cmp(a.status.label()))
        });
        rows
    }

    /// Evaluates every scalar slot and the chart for one selected date
    /// and attaches the display strings the frontend renders verbatim
    pub fn snapshot(&self, date: NaiveDate) -> DashboardSnapshot {
        let chart = self.chart_series(date);
        let sales_total = self.sales_total(date);
        let orders_total = self.orders_total(date);
        let avg_sale = self.avg_sale(date);
        let customer_count = self.customer_count(date);

        let status_shares = STATUS_CARDS
            .iter()
            .map(|&status| {
                let percent = self.status_percentage(date, status);
                let display = match percent {
                    Some(p) => format::format_percent(p, status_card_label(status)),
                    None => format::NO_DATA.to_string(),
                };
                StatusShare {
                    status,
                    percent,
                    display,
                }
            })
            .collect();

        DashboardSnapshot {
            start_date: date,
            chart,
            sales_total,
            sales_total_display: format::format_currency(sales_total),
            orders_total,
            avg_sale,
            avg_sale_display: match avg_sale {
                Some(avg) => format::format_currency(avg),
                None => format::NO_DATA.to_string(),
            },
            customer_count,
            status_shares,
        }
    }
}

/// Card labels differ slightly from the status labels in the source data
fn status_card_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::InProcess => "Processing",
        other => other.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_overview::dataset::OrderRecord;
    use contracts::enums::DealSize;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(
        number: i64,
        order_date: NaiveDate,
        sales: f64,
        status: OrderStatus,
        customer: &str,
    ) -> OrderRecord {
        OrderRecord {
            order_number: number,
            order_date,
            sales,
            status,
            deal_size: DealSize::Small,
            customer_name: customer.to_string(),
            contact_first_name: "Jean".to_string(),
            contact_last_name: "King".to_string(),
            phone: "7025551838".to_string(),
        }
    }

    fn fixture() -> ViewGraph {
        let orders = vec![
            order(10100, date(2003, 1, 15), 100.0, OrderStatus::Shipped, "Land of Toys Inc."),
            order(10101, date(2003, 1, 20), 200.0, OrderStatus::InProcess, "Reims Collectables"),
            order(10102, date(2003, 6, 10), 300.0, OrderStatus::Shipped, "Land of Toys Inc."),
            order(10103, date(2004, 3, 1), 400.0, OrderStatus::Disputed, "Mini Wheels Co."),
            order(10104, date(2004, 5, 1), 500.0, OrderStatus::Disputed, "Toys4GrownUps.com"),
            order(10105, date(2004, 5, 1), -50.0, OrderStatus::OnHold, "Reims Collectables"),
            order(10106, date(2005, 4, 30), 600.0, OrderStatus::Resolved, "Land of Toys Inc."),
        ];
        let csv_rows: String = orders
            .iter()
            .map(|o| {
                format!(
                    "{},{},{},{},{},{},{},{},{}\n",
                    o.order_number,
                    o.order_date.format("%Y-%m-%d"),
                    o.sales,
                    o.status.label(),
                    o.deal_size.label(),
                    o.customer_name,
                    o.contact_first_name,
                    o.contact_last_name,
                    o.phone
                )
            })
            .collect();
        let csv = format!(
            "ORDERNUMBER,ORDERDATE,SALES,STATUS,DEALSIZE,CUSTOMERNAME,CONTACTFIRSTNAME,CONTACTLASTNAME,PHONE\n{}",
            csv_rows
        );
        let dataset = SalesDataset::from_reader(csv.as_bytes()).unwrap();
        ViewGraph::new(Arc::new(dataset))
    }

    #[test]
    fn test_orders_total_monotonic_in_signal() {
        let graph = fixture();
        let signals = [
            date(2002, 1, 1),
            date(2003, 1, 20),
            date(2004, 5, 1),
            date(2005, 4, 30),
            date(2006, 1, 1),
        ];
        for window in signals.windows(2) {
            assert!(
                graph.orders_total(window[1]) <= graph.orders_total(window[0]),
                "orders_total must not grow as the lower bound rises"
            );
        }
    }

    #[test]
    fn test_sales_total_matches_chart_series() {
        let graph = fixture();
        for signal in [
            date(2002, 1, 1),
            date(2003, 6, 1),
            date(2004, 4, 30),
            date(2006, 1, 1),
        ] {
            let series_sum: f64 = graph
                .chart_series(signal)
                .iter()
                .map(|point| point.total)
                .sum();
            assert_eq!(graph.sales_total(signal), series_sum);
        }
    }

    #[test]
    fn test_status_percentages_bounded_and_partial() {
        let graph = fixture();
        let signal = date(2003, 1, 1);
        let mut sum = 0.0;
        for status in [
            OrderStatus::Shipped,
            OrderStatus::InProcess,
            OrderStatus::Disputed,
        ] {
            let pct = graph.status_percentage(signal, status).unwrap();
            assert!((0.0..=100.0).contains(&pct));
            sum += pct;
        }
        // The three cards cover a subset of statuses, never more than 100%
        assert!(sum <= 100.0 + 1e-9);
    }

    #[test]
    fn test_disputed_rows_filter_and_order() {
        let graph = fixture();
        let rows = graph.disputed_rows(date(2004, 1, 1));

        assert!(rows
            .iter()
            .all(|row| row.status.is_disputed_or_on_hold()
                && row.order_date >= date(2004, 1, 1)));
        // Descending by date, then by status label: the two 2004-05-01
        // rows come first with On Hold ahead of Disputed
        let keys: Vec<(NaiveDate, OrderStatus)> =
            rows.iter().map(|row| (row.order_date, row.status)).collect();
        assert_eq!(
            keys,
            vec![
                (date(2004, 5, 1), OrderStatus::OnHold),
                (date(2004, 5, 1), OrderStatus::Disputed),
                (date(2004, 3, 1), OrderStatus::Disputed),
            ]
        );
    }

    #[test]
    fn test_disputed_table_boundary_is_inclusive() {
        let graph = fixture();
        // Summary slots exclude the boundary date, the table includes it
        assert_eq!(graph.orders_total(date(2005, 4, 30)), 0);
        let rows = graph.disputed_rows(date(2004, 5, 1));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_signal_past_dataset_yields_no_data() {
        let graph = fixture();
        let signal = date(2006, 1, 1);

        assert_eq!(graph.orders_total(signal), 0);
        assert_eq!(graph.avg_sale(signal), None);
        assert_eq!(graph.status_percentage(signal, OrderStatus::Shipped), None);
        assert!(graph.chart_series(signal).is_empty());

        let snapshot = graph.snapshot(signal);
        assert_eq!(snapshot.avg_sale_display, "no data");
        assert!(snapshot.status_shares.iter().all(|s| s.percent.is_none()));
        assert!(snapshot.sales_total.is_finite());
    }

    #[test]
    fn test_signal_before_dataset_covers_everything() {
        let graph = fixture();
        let signal = date(2002, 1, 1);

        assert_eq!(
            graph.chart_series(signal),
            graph.dataset().monthly,
            "a signal before the first order leaves the series unfiltered"
        );
        assert_eq!(graph.customer_count(signal), 4);
        assert_eq!(graph.orders_total(signal), 7);
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let graph = fixture();
        let signal = date(2003, 6, 1);
        assert_eq!(graph.snapshot(signal), graph.snapshot(signal));
    }

    #[test]
    fn test_snapshot_display_strings() {
        let graph = fixture();
        let snapshot = graph.snapshot(date(2002, 1, 1));

        // 100 + 200 + 300 + 400 + 500 - 50 + 600
        assert_eq!(snapshot.sales_total, 2050.0);
        assert_eq!(snapshot.sales_total_display, "$2,050.00");
        assert_eq!(snapshot.orders_total, 7);
        assert_eq!(snapshot.avg_sale_display, "$292.86");
        let shipped = &snapshot.status_shares[0];
        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.display, "28.57% Shipped");
    }

    #[test]
    fn test_negative_total_renders_with_leading_minus() {
        let orders_csv = "ORDERNUMBER,ORDERDATE,SALES,STATUS,DEALSIZE,CUSTOMERNAME,CONTACTFIRSTNAME,CONTACTLASTNAME,PHONE\n\
            1,2003-02-10,-1234.56,Resolved,Small,A,F,L,1\n";
        let dataset = SalesDataset::from_reader(orders_csv.as_bytes()).unwrap();
        let graph = ViewGraph::new(Arc::new(dataset));
        let snapshot = graph.snapshot(date(2003, 1, 1));
        assert_eq!(snapshot.sales_total_display, "-$1,234.56");
    }
}

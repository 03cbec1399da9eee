use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    DashboardSnapshot, DatasetBounds, DisputedOrdersResponse,
};

use super::view_graph::ViewGraph;

/// Matches the source dashboard's table page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Date span of the loaded dataset
pub fn bounds(graph: &ViewGraph) -> DatasetBounds {
    graph.dataset().bounds
}

/// Re-evaluate every slot of the overview page for one selected date
pub fn snapshot(graph: &ViewGraph, date: NaiveDate) -> DashboardSnapshot {
    graph.snapshot(date)
}

/// One page of the disputed / on-hold orders table
pub fn disputed_page(
    graph: &ViewGraph,
    date: NaiveDate,
    page: usize,
    page_size: usize,
) -> DisputedOrdersResponse {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let rows = graph.disputed_rows(date);
    let total_count = rows.len() as u64;

    let start = page.saturating_mul(page_size);
    let items: Vec<_> = rows.into_iter().skip(start).take(page_size).collect();
    let has_more = start + items.len() < total_count as usize;

    DisputedOrdersResponse {
        items,
        total_count,
        page,
        page_size,
        has_more,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_overview::dataset::SalesDataset;
    use std::sync::Arc;

    fn graph_with_disputed_rows(count: usize) -> ViewGraph {
        let mut csv = String::from(
            "ORDERNUMBER,ORDERDATE,SALES,STATUS,DEALSIZE,CUSTOMERNAME,CONTACTFIRSTNAME,CONTACTLASTNAME,PHONE\n",
        );
        for i in 0..count {
            csv.push_str(&format!(
                "{},2004-03-{:02},100.0,Disputed,Small,Customer {},F,L,555\n",
                10100 + i as i64,
                1 + (i % 28),
                i
            ));
        }
        let dataset = SalesDataset::from_reader(csv.as_bytes()).unwrap();
        ViewGraph::new(Arc::new(dataset))
    }

    #[test]
    fn test_disputed_page_default_size() {
        let graph = graph_with_disputed_rows(23);
        let date = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();

        let first = disputed_page(&graph, date, 0, DEFAULT_PAGE_SIZE);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_count, 23);
        assert!(first.has_more);

        let last = disputed_page(&graph, date, 2, DEFAULT_PAGE_SIZE);
        assert_eq!(last.items.len(), 3);
        assert!(!last.has_more);
    }

    #[test]
    fn test_disputed_page_past_the_end_is_empty() {
        let graph = graph_with_disputed_rows(5);
        let date = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();

        let page = disputed_page(&graph, date, 7, DEFAULT_PAGE_SIZE);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert!(!page.has_more);
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let graph = graph_with_disputed_rows(12);
        let date = NaiveDate::from_ymd_opt(2004, 1, 1).unwrap();

        let page = disputed_page(&graph, date, 0, 0);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items.len(), 10);
    }
}

use crate::enums::{DealSize, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date span covered by the loaded dataset, drives the date picker range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// One point of the monthly sales series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthPoint {
    /// First day of the calendar month
    pub month: NaiveDate,
    pub total: f64,
}

/// Share of one order status among all orders after the selected date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusShare {
    pub status: OrderStatus,
    /// None when no orders fall after the selected date
    pub percent: Option<f64>,
    /// Preformatted text, e.g. "12.34% Shipped" or "no data"
    pub display: String,
}

/// Everything the overview page renders for one selected start date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub start_date: NaiveDate,
    pub chart: Vec<MonthPoint>,
    pub sales_total: f64,
    pub sales_total_display: String,
    pub orders_total: u64,
    /// None when orders_total is zero
    pub avg_sale: Option<f64>,
    pub avg_sale_display: String,
    pub customer_count: u64,
    pub status_shares: Vec<StatusShare>,
}

/// Projection of one disputed / on-hold order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputedOrderRow {
    pub order_number: i64,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub deal_size: DealSize,
    pub customer_name: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
}

/// One page of the disputed / on-hold orders table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputedOrdersResponse {
    pub items: Vec<DisputedOrderRow>,
    pub total_count: u64,
    pub page: usize,
    pub page_size: usize,
    pub has_more: bool,
}

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use contracts::dashboards::d100_sales_overview::{DatasetBounds, MonthPoint};
use contracts::enums::{DealSize, OrderStatus};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// One order line item from the source CSV.
///
/// Order numbers are not unique: every line of a multi-line order
/// carries the same order number.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub order_number: i64,
    pub order_date: NaiveDate,
    pub sales: f64,
    pub status: OrderStatus,
    pub deal_size: DealSize,
    pub customer_name: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub phone: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid order date '{value}'")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: unknown order status '{value}'")]
    UnknownStatus { row: usize, value: String },
    #[error("row {row}: unknown deal size '{value}'")]
    UnknownDealSize { row: usize, value: String },
    #[error("dataset contains no rows")]
    Empty,
}

/// Raw CSV row; extra columns in the source file are ignored
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    #[serde(rename = "ORDERNUMBER")]
    order_number: i64,
    #[serde(rename = "ORDERDATE")]
    order_date: String,
    #[serde(rename = "SALES")]
    sales: f64,
    #[serde(rename = "STATUS")]
    status: String,
    #[serde(rename = "DEALSIZE")]
    deal_size: String,
    #[serde(rename = "CUSTOMERNAME")]
    customer_name: String,
    #[serde(rename = "CONTACTFIRSTNAME")]
    contact_first_name: String,
    #[serde(rename = "CONTACTLASTNAME")]
    contact_last_name: String,
    #[serde(rename = "PHONE")]
    phone: String,
}

/// Immutable in-memory order table plus aggregates derived once at load.
///
/// Loaded eagerly at startup and never re-fetched; any parse problem is
/// fatal and aborts startup with no partial rendering.
#[derive(Debug)]
pub struct SalesDataset {
    pub orders: Vec<OrderRecord>,
    /// Total sales per calendar month, ascending by month
    pub monthly: Vec<MonthPoint>,
    pub bounds: DatasetBounds,
}

impl SalesDataset {
    /// Load the dataset from a CSV file on disk
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the dataset from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut orders = Vec::new();

        for (index, result) in csv_reader.deserialize::<RawOrderRow>().enumerate() {
            // Header is line 1, first data row is line 2
            let row = index + 2;
            let raw = result?;

            let order_date = parse_order_date(&raw.order_date).ok_or_else(|| {
                DatasetError::InvalidDate {
                    row,
                    value: raw.order_date.clone(),
                }
            })?;
            let status = OrderStatus::from_label(&raw.status).ok_or_else(|| {
                DatasetError::UnknownStatus {
                    row,
                    value: raw.status.clone(),
                }
            })?;
            let deal_size = DealSize::from_label(&raw.deal_size).ok_or_else(|| {
                DatasetError::UnknownDealSize {
                    row,
                    value: raw.deal_size.clone(),
                }
            })?;

            orders.push(OrderRecord {
                order_number: raw.order_number,
                order_date,
                sales: raw.sales,
                status,
                deal_size,
                customer_name: raw.customer_name,
                contact_first_name: raw.contact_first_name,
                contact_last_name: raw.contact_last_name,
                phone: raw.phone,
            });
        }

        if orders.is_empty() {
            return Err(DatasetError::Empty);
        }

        let monthly = build_monthly(&orders);
        let bounds = build_bounds(&orders);

        Ok(SalesDataset {
            orders,
            monthly,
            bounds,
        })
    }
}

/// Accepts the source data's `m/d/Y H:M` timestamps and plain ISO dates
fn parse_order_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%m/%d/%Y %H:%M") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Sum of sales per calendar month, keyed by the first day of the month
fn build_monthly(orders: &[OrderRecord]) -> Vec<MonthPoint> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for order in orders {
        let month = first_of_month(order.order_date);
        *totals.entry(month).or_insert(0.0) += order.sales;
    }
    totals
        .into_iter()
        .map(|(month, total)| MonthPoint { month, total })
        .collect()
}

fn build_bounds(orders: &[OrderRecord]) -> DatasetBounds {
    let mut min_date = orders[0].order_date;
    let mut max_date = orders[0].order_date;
    for order in &orders[1..] {
        if order.order_date < min_date {
            min_date = order.order_date;
        }
        if order.order_date > max_date {
            max_date = order.order_date;
        }
    }
    DatasetBounds { min_date, max_date }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid")
}

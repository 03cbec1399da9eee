use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_sales_overview::{
    DashboardSnapshot, DatasetBounds, DisputedOrdersResponse,
};
use gloo_net::http::Request;

/// Fetch the date span of the loaded dataset
pub async fn get_bounds() -> Result<DatasetBounds, String> {
    fetch_json(&api_url("/api/d100/bounds")).await
}

/// Fetch every overview slot for one selected start date
pub async fn get_snapshot(date: &str) -> Result<DashboardSnapshot, String> {
    fetch_json(&api_url(&format!("/api/d100/snapshot?date={}", date))).await
}

/// Fetch one page of the disputed / on-hold orders table
pub async fn get_disputed(
    date: &str,
    page: usize,
    page_size: usize,
) -> Result<DisputedOrdersResponse, String> {
    fetch_json(&api_url(&format!(
        "/api/d100/disputed?date={}&page={}&page_size={}",
        date, page, page_size
    )))
    .await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

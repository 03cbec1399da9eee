use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use contracts::dashboards::d100_sales_overview::{
    DashboardSnapshot, DatasetBounds, DisputedOrdersResponse,
};

use crate::dashboards::d100_sales_overview::service;
use crate::dashboards::d100_sales_overview::view_graph::ViewGraph;

#[derive(Deserialize)]
pub struct SnapshotParams {
    pub date: String,
}

#[derive(Deserialize)]
pub struct DisputedParams {
    pub date: String,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

pub async fn get_bounds(State(graph): State<Arc<ViewGraph>>) -> Json<DatasetBounds> {
    Json(service::bounds(&graph))
}

pub async fn get_snapshot(
    State(graph): State<Arc<ViewGraph>>,
    Query(params): Query<SnapshotParams>,
) -> Result<Json<DashboardSnapshot>, StatusCode> {
    let date = parse_date(&params.date)?;
    Ok(Json(service::snapshot(&graph, date)))
}

pub async fn get_disputed(
    State(graph): State<Arc<ViewGraph>>,
    Query(params): Query<DisputedParams>,
) -> Result<Json<DisputedOrdersResponse>, StatusCode> {
    let date = parse_date(&params.date)?;
    let page = params.page.unwrap_or(0);
    let page_size = params.page_size.unwrap_or(service::DEFAULT_PAGE_SIZE);
    Ok(Json(service::disputed_page(&graph, date, page, page_size)))
}

fn parse_date(value: &str) -> Result<NaiveDate, StatusCode> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        tracing::warn!("Rejected dashboard request with bad date '{}': {}", value, e);
        StatusCode::BAD_REQUEST
    })
}

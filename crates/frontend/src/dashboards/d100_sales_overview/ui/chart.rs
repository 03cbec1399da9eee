use chrono::Datelike;
use contracts::dashboards::d100_sales_overview::MonthPoint;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 840.0;
const CHART_HEIGHT: f64 = 320.0;
const PADDING: f64 = 40.0;

/// Line chart of monthly sales rendered as inline SVG.
///
/// An empty series renders an empty plot area, never an error state.
#[component]
pub fn SalesChart(
    #[prop(into)] series: Signal<Vec<MonthPoint>>,
) -> impl IntoView {
    let points = move || polyline_points(&series.get(), CHART_WIDTH, CHART_HEIGHT, PADDING);

    let x_labels = move || {
        let data = series.get();
        match (data.first(), data.last()) {
            (Some(first), Some(last)) => (month_label(first), month_label(last)),
            _ => (String::new(), String::new()),
        }
    };

    let y_labels = move || {
        let data = series.get();
        if data.is_empty() {
            return (String::new(), String::new());
        }
        let (min, max) = value_range(&data);
        (format!("{:.0}", min), format!("{:.0}", max))
    };

    let left = PADDING.to_string();
    let right = (CHART_WIDTH - PADDING).to_string();
    let top = PADDING.to_string();
    let bottom = (CHART_HEIGHT - PADDING).to_string();
    let x_label_y = (CHART_HEIGHT - 10.0).to_string();
    let y_max_label_y = (PADDING + 4.0).to_string();

    view! {
        <svg
            class="sales-chart"
            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
            style="width: 100%; max-width: 840px; background: #fff; border: 1px solid #ddd; border-radius: 4px;"
        >
            // Plot frame
            <line
                x1=left.clone() y1=bottom.clone()
                x2=right.clone() y2=bottom.clone()
                stroke="#999" stroke-width="1"
            />
            <line
                x1=left.clone() y1=top.clone()
                x2=left.clone() y2=bottom.clone()
                stroke="#999" stroke-width="1"
            />

            <polyline
                points=points
                fill="none"
                stroke="#2196F3"
                stroke-width="2"
            />

            <text x=left.clone() y=x_label_y.clone() font-size="12" fill="#666">
                {move || x_labels().0}
            </text>
            <text
                x=right.clone() y=x_label_y.clone()
                font-size="12" fill="#666" text-anchor="end"
            >
                {move || x_labels().1}
            </text>
            <text x="4" y=bottom.clone() font-size="12" fill="#666">
                {move || y_labels().0}
            </text>
            <text x="4" y=y_max_label_y font-size="12" fill="#666">
                {move || y_labels().1}
            </text>
        </svg>
    }
}

fn month_label(point: &MonthPoint) -> String {
    format!("{} {}", month_abbrev(point.month.month()), point.month.year())
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
        5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
        9 => "Sep", 10 => "Oct", 11 => "Nov", _ => "Dec",
    }
}

fn value_range(series: &[MonthPoint]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series {
        min = min.min(point.total);
        max = max.max(point.total);
    }
    (min, max)
}

/// Maps the series onto SVG coordinates: months spaced evenly along x,
/// totals scaled into the padded plot area with larger values higher up
fn polyline_points(series: &[MonthPoint], width: f64, height: f64, padding: f64) -> String {
    if series.is_empty() {
        return String::new();
    }

    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;
    let (min, max) = value_range(series);
    let span = max - min;

    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if series.len() == 1 {
                padding + plot_width / 2.0
            } else {
                padding + plot_width * i as f64 / (series.len() - 1) as f64
            };
            let scaled = if span == 0.0 {
                0.5
            } else {
                (point.total - min) / span
            };
            let y = height - padding - plot_height * scaled;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

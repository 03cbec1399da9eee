pub mod dashboards;
pub mod handlers;
pub mod shared;

use std::sync::Arc;

use dashboards::d100_sales_overview::dataset::SalesDataset;
use dashboards::d100_sales_overview::view_graph::ViewGraph;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build output
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging middleware: time | duration | status | method | path
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use chrono::Utc;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let status = response.status().as_u16();
        // Cyan for 200, brown for everything else
        let color_code = if status == 200 { "36" } else { "33" };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
            color_code,
            Utc::now().format("%H:%M:%S"),
            duration.as_millis(),
            status,
            method,
            uri.path()
        );

        response
    }

    let config = shared::config::load_config()?;

    // Load the order dataset once, eagerly. A missing or malformed file
    // is fatal: the dashboard never renders from partial data.
    let dataset_path = shared::config::get_dataset_path(&config)?;
    tracing::info!("Loading sales dataset from {}", dataset_path.display());
    let dataset = SalesDataset::load(&dataset_path)
        .map_err(|e| anyhow::anyhow!("dataset load failed: {e}"))?;
    tracing::info!(
        "Loaded {} order lines covering {} - {}",
        dataset.orders.len(),
        dataset.bounds.min_date,
        dataset.bounds.max_date
    );

    let graph = Arc::new(ViewGraph::new(Arc::new(dataset)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales Overview Dashboard
        .route(
            "/api/d100/bounds",
            get(handlers::d100_sales_overview::get_bounds),
        )
        .route(
            "/api/d100/snapshot",
            get(handlers::d100_sales_overview::get_snapshot),
        )
        .route(
            "/api/d100/disputed",
            get(handlers::d100_sales_overview::get_disputed),
        )
        .with_state(graph)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

pub mod dashboards;
pub mod handlers;
pub mod shared;

use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{any, get};
use axum::Router;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::config::Config;

fn init_tracing() -> anyhow::Result<()> {
    let log_dir = Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            // SQL statement logs stay quiet unless RUST_LOG asks for them
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn,sea_orm=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn build_router(config: &Config) -> Router {
    use handlers::{d100_sales_analytics as sales, d101_sample_data, system};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Client-side routes (/sample-data, ...) resolve to index.html
    let static_dir = Path::new(&config.server.static_dir);
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(system::health))
        .route("/api/sales/overview", get(sales::get_overview))
        .route("/api/sales/trends", get(sales::get_trends))
        .route("/api/sales/by-product", get(sales::get_by_product))
        .route("/api/sales/by-region", get(sales::get_by_region))
        .route("/api/sales/by-category", get(sales::get_by_category))
        .route("/api/sales/recent", get(sales::get_recent))
        .route("/api/sample-data", get(d101_sample_data::get_sample_data))
        .route("/api/*rest", any(system::api_not_found))
        .with_state::<()>(config.dashboard.clone())
        .fallback_service(spa)
        .layer(middleware::from_fn(shared::request_log::request_logger))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = shared::config::load_config()?;

    shared::data::db::initialize_database(&config)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let app = build_router(&config);
    let addr = config.server.socket_addr()?;

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
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DashboardConfig;

    #[test]
    fn test_router_builds_from_default_config() {
        let config = shared::config::parse_config(
            "[server]\nhost = \"127.0.0.1\"\nport = 0\nstatic_dir = \"dist\"\n[database]\npath = \"x.db\"\n",
        )
        .unwrap();
        assert_eq!(config.dashboard, DashboardConfig::default());
        let _router = build_router(&config);
    }
}

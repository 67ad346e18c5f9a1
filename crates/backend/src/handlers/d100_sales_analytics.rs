use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d100_sales_analytics::{
    CategorySalesRow, ProductSalesRow, RecentSaleRow, RegionSalesRow, SalesOverview, SalesTrendRow,
};

use super::with_db;
use crate::dashboards::d100_sales_analytics::service;
use crate::shared::config::DashboardConfig;

fn respond<T>(what: &str, result: anyhow::Result<T>) -> Result<Json<T>, StatusCode> {
    match result {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get {}: {}", what, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sales/overview
pub async fn get_overview() -> Result<Json<SalesOverview>, StatusCode> {
    let result = with_db(service::get_overview).await;
    respond("overview", result)
}

/// GET /api/sales/trends
pub async fn get_trends() -> Result<Json<Vec<SalesTrendRow>>, StatusCode> {
    let result = with_db(service::get_trends).await;
    if let Ok(rows) = &result {
        tracing::info!("D100 Dashboard: Returning {} monthly trend rows", rows.len());
    }
    respond("trends", result)
}

/// GET /api/sales/by-product
pub async fn get_by_product() -> Result<Json<Vec<ProductSalesRow>>, StatusCode> {
    let result = with_db(service::get_by_product).await;
    respond("sales by product", result)
}

/// GET /api/sales/by-region
pub async fn get_by_region() -> Result<Json<Vec<RegionSalesRow>>, StatusCode> {
    let result = with_db(service::get_by_region).await;
    respond("sales by region", result)
}

/// GET /api/sales/by-category
pub async fn get_by_category() -> Result<Json<Vec<CategorySalesRow>>, StatusCode> {
    let result = with_db(service::get_by_category).await;
    respond("sales by category", result)
}

/// GET /api/sales/recent
pub async fn get_recent(
    State(dashboard): State<DashboardConfig>,
) -> Result<Json<Vec<RecentSaleRow>>, StatusCode> {
    let limit = dashboard.recent_limit;
    let result = with_db(|db| service::get_recent(db, limit)).await;
    respond("recent sales", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_map_to_internal_error() {
        let failed: anyhow::Result<SalesOverview> = Err(anyhow::anyhow!("disk I/O error"));
        assert_eq!(
            respond("overview", failed).unwrap_err(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let Json(ok) = respond("overview", Ok(SalesOverview::default())).unwrap();
        assert_eq!(ok, SalesOverview::default());
    }
}

//! Sales analytics payload: typed aggregates plus the ratios the charts need.

use contracts::dashboards::d100_sales_analytics::{
    CategorySalesRow, ProductSalesRow, RecentSaleRow, RegionSalesRow, SalesOverview,
    SalesTrendRow, BY_CATEGORY_PATH, BY_PRODUCT_PATH, BY_REGION_PATH, OVERVIEW_PATH, RECENT_PATH,
    SALES_ENDPOINTS, TRENDS_PATH,
};

use crate::shared::dashboard_data::metrics::{normalize_field, percentage_field, top_n};
use crate::shared::dashboard_data::{AggregateRequestSet, FetchError, RawAggregateBundle};
use crate::shared::settings::settings;

/// Month bar of the trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub row: SalesTrendRow,
    /// revenue / max monthly revenue
    pub height_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductBar {
    pub row: ProductSalesRow,
    /// revenue / max revenue over all products, not only the displayed ones
    pub width_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub row: RegionSalesRow,
    pub share_percent: f64,
    pub height_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub row: CategorySalesRow,
    pub share_percent: f64,
}

/// Everything the sales dashboard renders in the `Ready` state.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDashboardView {
    pub overview: SalesOverview,
    pub trends: Vec<TrendPoint>,
    pub top_products: Vec<ProductBar>,
    pub regions: Vec<RegionShare>,
    pub categories: Vec<CategoryShare>,
    pub recent: Vec<RecentSaleRow>,
}

pub fn sales_request_set() -> AggregateRequestSet {
    AggregateRequestSet::new(SALES_ENDPOINTS)
}

/// Decodes the six sales aggregates and derives chart ratios.
pub fn derive_sales_view(bundle: &RawAggregateBundle) -> Result<SalesDashboardView, FetchError> {
    derive_with_limit(bundle, settings().top_products)
}

fn derive_with_limit(
    bundle: &RawAggregateBundle,
    top_products: usize,
) -> Result<SalesDashboardView, FetchError> {
    let overview: SalesOverview = bundle.decode(OVERVIEW_PATH)?;
    let trends: Vec<SalesTrendRow> = bundle.decode(TRENDS_PATH)?;
    let products: Vec<ProductSalesRow> = bundle.decode(BY_PRODUCT_PATH)?;
    let regions: Vec<RegionSalesRow> = bundle.decode(BY_REGION_PATH)?;
    let categories: Vec<CategorySalesRow> = bundle.decode(BY_CATEGORY_PATH)?;
    let recent: Vec<RecentSaleRow> = bundle.decode(RECENT_PATH)?;

    let trend_heights = normalize_field(&trends, |r| r.revenue);
    let trends = trends
        .into_iter()
        .zip(trend_heights)
        .map(|(row, height_ratio)| TrendPoint { row, height_ratio })
        .collect();

    let product_widths = normalize_field(&products, |r| r.revenue);
    let top_products = top_n(&products, top_products)
        .iter()
        .zip(&product_widths)
        .map(|(row, width_ratio)| ProductBar {
            row: row.clone(),
            width_ratio: *width_ratio,
        })
        .collect();

    let region_shares = percentage_field(&regions, |r| r.revenue);
    let region_heights = normalize_field(&regions, |r| r.revenue);
    let regions = regions
        .into_iter()
        .zip(region_shares.into_iter().zip(region_heights))
        .map(|(row, (share_percent, height_ratio))| RegionShare {
            row,
            share_percent,
            height_ratio,
        })
        .collect();

    let category_shares = percentage_field(&categories, |r| r.revenue);
    let categories = categories
        .into_iter()
        .zip(category_shares)
        .map(|(row, share_percent)| CategoryShare { row, share_percent })
        .collect();

    Ok(SalesDashboardView {
        overview,
        trends,
        top_products,
        regions,
        categories,
        recent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn bundle_with(overrides: &[(&str, Value)]) -> RawAggregateBundle {
        SALES_ENDPOINTS
            .iter()
            .map(|endpoint| {
                let value = overrides
                    .iter()
                    .find(|(name, _)| name == endpoint)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_else(|| {
                        if *endpoint == OVERVIEW_PATH {
                            json!({
                                "total_revenue": 0,
                                "total_orders": 0,
                                "avg_order_value": 0,
                                "unique_customers": 0
                            })
                        } else {
                            json!([])
                        }
                    });
                (endpoint.to_string(), value)
            })
            .collect()
    }

    fn products(revenues: &[f64]) -> Value {
        Value::Array(
            revenues
                .iter()
                .enumerate()
                .map(|(i, r)| json!({"product": format!("P{}", i), "revenue": r, "quantity": 1}))
                .collect(),
        )
    }

    #[test]
    fn test_region_shares_and_heights() {
        let bundle = bundle_with(&[(
            BY_REGION_PATH,
            json!([
                {"region": "West", "revenue": 300, "orders": 3},
                {"region": "East", "revenue": 100, "orders": 1},
                {"region": "North", "revenue": 100, "orders": 2}
            ]),
        )]);

        let view = derive_sales_view(&bundle).unwrap();
        let names: Vec<&str> = view.regions.iter().map(|r| r.row.region.as_str()).collect();
        assert_eq!(names, vec!["West", "East", "North"]);

        let shares: Vec<f64> = view.regions.iter().map(|r| r.share_percent).collect();
        let heights: Vec<f64> = view.regions.iter().map(|r| r.height_ratio).collect();
        for (actual, expected) in shares.iter().zip([60.0, 20.0, 20.0]) {
            assert!((actual - expected).abs() < 1e-9);
        }
        for (actual, expected) in heights.iter().zip([1.0, 1.0 / 3.0, 1.0 / 3.0]) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_overview_and_empty_series() {
        let view = derive_sales_view(&bundle_with(&[])).unwrap();
        assert_eq!(view.overview, SalesOverview::default());
        assert!(view.trends.is_empty());
        assert!(view.top_products.is_empty());
        assert!(view.regions.is_empty());
        assert!(view.categories.is_empty());
        assert!(view.recent.is_empty());
    }

    #[test]
    fn test_all_zero_revenue_is_not_nan() {
        let bundle = bundle_with(&[
            (
                BY_CATEGORY_PATH,
                json!([
                    {"category": "Electronics", "revenue": 0, "quantity": 0},
                    {"category": "Furniture", "revenue": 0, "quantity": 0}
                ]),
            ),
            (BY_PRODUCT_PATH, products(&[0.0, 0.0])),
        ]);

        let view = derive_sales_view(&bundle).unwrap();
        assert!(view.categories.iter().all(|c| c.share_percent == 0.0));
        assert!(view.top_products.iter().all(|p| p.width_ratio == 0.0));
    }

    #[test]
    fn test_top_products_keep_source_order_and_global_max() {
        let bundle = bundle_with(&[(BY_PRODUCT_PATH, products(&[50.0, 200.0, 100.0, 10.0]))]);

        let view = derive_with_limit(&bundle, 2).unwrap();
        let names: Vec<&str> = view
            .top_products
            .iter()
            .map(|p| p.row.product.as_str())
            .collect();
        assert_eq!(names, vec!["P0", "P1"]);
        assert_eq!(view.top_products[0].width_ratio, 0.25);
        assert_eq!(view.top_products[1].width_ratio, 1.0);
    }

    #[test]
    fn test_trend_heights() {
        let bundle = bundle_with(&[(
            TRENDS_PATH,
            json!([
                {"month": "2024-01", "revenue": 400, "orders": 4, "quantity": 9},
                {"month": "2024-02", "revenue": 800, "orders": 7, "quantity": 15}
            ]),
        )]);

        let view = derive_sales_view(&bundle).unwrap();
        assert_eq!(view.trends[0].height_ratio, 0.5);
        assert_eq!(view.trends[1].height_ratio, 1.0);
        assert_eq!(view.trends[1].row.month, "2024-02");
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let bundle = bundle_with(&[(RECENT_PATH, json!([{"id": 1}]))]);
        let err = derive_sales_view(&bundle).unwrap_err();
        assert_eq!(err.endpoint(), RECENT_PATH);
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let bundle = bundle_with(&[
            (BY_PRODUCT_PATH, products(&[3.3, 1.1, 7.7])),
            (
                BY_REGION_PATH,
                json!([{"region": "South", "revenue": 12.34, "orders": 1}]),
            ),
        ]);
        assert_eq!(derive_sales_view(&bundle), derive_sales_view(&bundle));
    }
}

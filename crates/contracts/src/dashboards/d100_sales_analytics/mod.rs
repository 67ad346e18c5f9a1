//! Wire shapes of the `/api/sales/*` endpoints.
//!
//! Rows are delivered already aggregated; sequences keep the order chosen by
//! the server (revenue descending for rankings, chronological for trends,
//! newest first for recent sales).

use serde::{Deserialize, Serialize};

pub const OVERVIEW_PATH: &str = "sales/overview";
pub const TRENDS_PATH: &str = "sales/trends";
pub const BY_PRODUCT_PATH: &str = "sales/by-product";
pub const BY_REGION_PATH: &str = "sales/by-region";
pub const BY_CATEGORY_PATH: &str = "sales/by-category";
pub const RECENT_PATH: &str = "sales/recent";

/// All endpoints of the sales dashboard, in display order
pub const SALES_ENDPOINTS: [&str; 6] = [
    OVERVIEW_PATH,
    TRENDS_PATH,
    BY_PRODUCT_PATH,
    BY_REGION_PATH,
    BY_CATEGORY_PATH,
    RECENT_PATH,
];

/// `GET /api/sales/overview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub avg_order_value: f64,
    pub unique_customers: i64,
}

/// `GET /api/sales/trends`, one row per month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendRow {
    /// Month in format "YYYY-MM"
    pub month: String,
    pub revenue: f64,
    pub orders: i64,
    pub quantity: i64,
}

/// `GET /api/sales/by-product`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesRow {
    pub product: String,
    pub revenue: f64,
    pub quantity: i64,
}

/// `GET /api/sales/by-region`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSalesRow {
    pub region: String,
    pub revenue: f64,
    pub orders: i64,
}

/// `GET /api/sales/by-category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySalesRow {
    pub category: String,
    pub revenue: f64,
    pub quantity: i64,
}

/// `GET /api/sales/recent`, single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSaleRow {
    pub id: i64,
    /// Date in format "YYYY-MM-DD"
    pub date: String,
    pub product: String,
    pub category: String,
    pub region: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub revenue: f64,
    pub customer_id: String,
}

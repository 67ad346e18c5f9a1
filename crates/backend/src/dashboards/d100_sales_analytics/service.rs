use anyhow::Result;
use contracts::dashboards::d100_sales_analytics::{
    CategorySalesRow, ProductSalesRow, RecentSaleRow, RegionSalesRow, SalesOverview, SalesTrendRow,
};
use sea_orm::DatabaseConnection;

use super::repository::{self, GroupBy};

pub async fn get_overview(db: &DatabaseConnection) -> Result<SalesOverview> {
    let row = repository::get_overview(db).await?;
    Ok(SalesOverview {
        total_revenue: row.total_revenue,
        total_orders: row.total_orders,
        avg_order_value: row.avg_order_value,
        unique_customers: row.unique_customers,
    })
}

pub async fn get_trends(db: &DatabaseConnection) -> Result<Vec<SalesTrendRow>> {
    let rows = repository::get_monthly_trends(db).await?;
    Ok(rows
        .into_iter()
        .map(|r| SalesTrendRow {
            month: r.month,
            revenue: r.revenue,
            orders: r.orders,
            quantity: r.quantity,
        })
        .collect())
}

pub async fn get_by_product(db: &DatabaseConnection) -> Result<Vec<ProductSalesRow>> {
    let rows = repository::get_grouped(db, GroupBy::Product).await?;
    Ok(rows
        .into_iter()
        .map(|r| ProductSalesRow {
            product: r.label,
            revenue: r.revenue,
            quantity: r.quantity,
        })
        .collect())
}

pub async fn get_by_region(db: &DatabaseConnection) -> Result<Vec<RegionSalesRow>> {
    let rows = repository::get_grouped(db, GroupBy::Region).await?;
    Ok(rows
        .into_iter()
        .map(|r| RegionSalesRow {
            region: r.label,
            revenue: r.revenue,
            orders: r.orders,
        })
        .collect())
}

pub async fn get_by_category(db: &DatabaseConnection) -> Result<Vec<CategorySalesRow>> {
    let rows = repository::get_grouped(db, GroupBy::Category).await?;
    Ok(rows
        .into_iter()
        .map(|r| CategorySalesRow {
            category: r.label,
            revenue: r.revenue,
            quantity: r.quantity,
        })
        .collect())
}

pub async fn get_recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<RecentSaleRow>> {
    let rows = repository::get_recent(db, limit).await?;
    Ok(rows
        .into_iter()
        .map(|r| RecentSaleRow {
            id: r.id,
            date: r.date,
            product: r.product,
            category: r.category,
            region: r.region,
            quantity: r.quantity,
            unit_price: r.unit_price,
            revenue: r.revenue,
            customer_id: r.customer_id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_support::{cleanup, temp_database};
    use crate::shared::data::seed::seed_demo_sales;

    #[tokio::test]
    async fn test_seeded_database_serves_consistent_aggregates() {
        let (conn, path) = temp_database().await;
        seed_demo_sales(&conn).await.unwrap();

        let overview = get_overview(&conn).await.unwrap();
        let trends = get_trends(&conn).await.unwrap();
        let regions = get_by_region(&conn).await.unwrap();

        let trend_orders: i64 = trends.iter().map(|t| t.orders).sum();
        let region_orders: i64 = regions.iter().map(|r| r.orders).sum();
        assert_eq!(trend_orders, overview.total_orders);
        assert_eq!(region_orders, overview.total_orders);
        assert!(trends.len() <= 12);

        let region_revenue: f64 = regions.iter().map(|r| r.revenue).sum();
        assert!((region_revenue - overview.total_revenue).abs() < 1.0);
        assert!(regions.windows(2).all(|w| w[0].revenue >= w[1].revenue));

        let recent = get_recent(&conn, 10).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));

        cleanup(conn, path).await;
    }
}

use anyhow::Result;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

// SQLite types aggregate expressions by their runtime value, so every
// aggregate is CAST to the type the row struct expects.

#[derive(Debug, Clone, FromQueryResult)]
pub struct OverviewAggregation {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub avg_order_value: f64,
    pub unique_customers: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct MonthlyAggregation {
    pub month: String,
    pub revenue: f64,
    pub orders: i64,
    pub quantity: i64,
}

/// Revenue and quantity for one value of a grouping column
#[derive(Debug, Clone, FromQueryResult)]
pub struct GroupAggregation {
    pub label: String,
    pub revenue: f64,
    pub orders: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, FromQueryResult)]
pub struct SaleRecord {
    pub id: i64,
    pub date: String,
    pub product: String,
    pub category: String,
    pub region: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub revenue: f64,
    pub customer_id: String,
}

/// Columns of `sales` the dashboard groups by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Product,
    Region,
    Category,
}

impl GroupBy {
    fn column(self) -> &'static str {
        match self {
            GroupBy::Product => "product",
            GroupBy::Region => "region",
            GroupBy::Category => "category",
        }
    }
}

pub async fn get_overview(db: &DatabaseConnection) -> Result<OverviewAggregation> {
    let sql = r#"
        SELECT
            CAST(ROUND(COALESCE(SUM(revenue), 0), 2) AS REAL) AS total_revenue,
            CAST(COUNT(*) AS INTEGER) AS total_orders,
            CAST(ROUND(COALESCE(AVG(revenue), 0), 2) AS REAL) AS avg_order_value,
            CAST(COUNT(DISTINCT customer_id) AS INTEGER) AS unique_customers
        FROM sales
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    OverviewAggregation::find_by_statement(stmt)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("overview query returned no row"))
}

/// One row per month ("YYYY-MM"), chronological
pub async fn get_monthly_trends(db: &DatabaseConnection) -> Result<Vec<MonthlyAggregation>> {
    let sql = r#"
        SELECT
            substr(date, 1, 7) AS month,
            CAST(ROUND(SUM(revenue), 2) AS REAL) AS revenue,
            CAST(COUNT(*) AS INTEGER) AS orders,
            CAST(SUM(quantity) AS INTEGER) AS quantity
        FROM sales
        GROUP BY substr(date, 1, 7)
        ORDER BY month
    "#;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql.to_string());
    Ok(MonthlyAggregation::find_by_statement(stmt).all(db).await?)
}

/// Revenue ranking for `group`, highest first; ties break on the label
pub async fn get_grouped(db: &DatabaseConnection, group: GroupBy) -> Result<Vec<GroupAggregation>> {
    let column = group.column();
    let sql = format!(
        r#"
        SELECT
            {column} AS label,
            CAST(ROUND(SUM(revenue), 2) AS REAL) AS revenue,
            CAST(COUNT(*) AS INTEGER) AS orders,
            CAST(SUM(quantity) AS INTEGER) AS quantity
        FROM sales
        GROUP BY {column}
        ORDER BY revenue DESC, label
        "#
    );

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql);
    Ok(GroupAggregation::find_by_statement(stmt).all(db).await?)
}

/// Newest transactions first
pub async fn get_recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<SaleRecord>> {
    let sql = r#"
        SELECT id, date, product, category, region, quantity, unit_price, revenue, customer_id
        FROM sales
        ORDER BY date DESC, id DESC
        LIMIT ?
    "#;

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let stmt = Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, [limit.into()]);
    Ok(SaleRecord::find_by_statement(stmt).all(db).await?)
}

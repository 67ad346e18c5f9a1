//! Deterministic demo rows for an empty `sales` table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait};

const DEMO_SEED: u64 = 2024;
const DEMO_ROWS: usize = 600;
const DEMO_YEAR: i32 = 2024;
const DEMO_CUSTOMERS: u32 = 180;

/// (product, category, list price)
const CATALOG: [(&str, &str, f64); 10] = [
    ("Laptop Pro", "Electronics", 1299.0),
    ("Smartphone X", "Electronics", 899.0),
    ("Wireless Headphones", "Electronics", 199.0),
    ("4K Monitor", "Electronics", 449.0),
    ("Ergonomic Chair", "Furniture", 329.0),
    ("Standing Desk", "Furniture", 579.0),
    ("Espresso Machine", "Appliances", 249.0),
    ("Air Purifier", "Appliances", 179.0),
    ("Travel Backpack", "Accessories", 89.0),
    ("Leather Wallet", "Accessories", 49.0),
];

const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

/// One row to insert into `sales`; revenue is derived
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub date: String,
    pub product: String,
    pub category: String,
    pub region: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub customer_id: String,
}

impl NewSale {
    pub fn revenue(&self) -> f64 {
        round_cents(self.quantity as f64 * self.unit_price)
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Same seed, same rows. Sorted by date so ids follow time.
pub fn generate_demo_sales(count: usize, seed: u64) -> Vec<NewSale> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sales: Vec<NewSale> = (0..count)
        .map(|_| {
            let (product, category, list_price) = CATALOG[rng.gen_range(0..CATALOG.len())];
            let month: u32 = rng.gen_range(1..=12);
            let day: u32 = rng.gen_range(1..=28);
            let discount: f64 = rng.gen_range(0.85..=1.0);

            NewSale {
                date: format!("{:04}-{:02}-{:02}", DEMO_YEAR, month, day),
                product: product.to_string(),
                category: category.to_string(),
                region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
                quantity: rng.gen_range(1..=5),
                unit_price: round_cents(list_price * discount),
                customer_id: format!("CUST-{:04}", rng.gen_range(1..=DEMO_CUSTOMERS)),
            }
        })
        .collect();

    sales.sort_by(|a, b| a.date.cmp(&b.date));
    sales
}

pub async fn insert_sales<C: ConnectionTrait>(conn: &C, sales: &[NewSale]) -> anyhow::Result<()> {
    let sql = r#"
        INSERT INTO sales (date, product, category, region, quantity, unit_price, revenue, customer_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    "#;

    for sale in sales {
        conn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            sql,
            [
                sale.date.clone().into(),
                sale.product.clone().into(),
                sale.category.clone().into(),
                sale.region.clone().into(),
                sale.quantity.into(),
                sale.unit_price.into(),
                sale.revenue().into(),
                sale.customer_id.clone().into(),
            ],
        ))
        .await?;
    }
    Ok(())
}

/// Fills `sales` with demo rows when it is empty. Returns the inserted count.
pub async fn seed_demo_sales(conn: &DatabaseConnection) -> anyhow::Result<usize> {
    let row = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS cnt FROM sales;".to_string(),
        ))
        .await?;
    let existing: i64 = match row {
        Some(row) => row.try_get("", "cnt")?,
        None => 0,
    };
    if existing > 0 {
        return Ok(0);
    }

    let sales = generate_demo_sales(DEMO_ROWS, DEMO_SEED);
    let txn = conn.begin().await?;
    insert_sales(&txn, &sales).await?;
    txn.commit().await?;

    Ok(sales.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_support::{cleanup, temp_database};

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate_demo_sales(50, 7);
        let second = generate_demo_sales(50, 7);
        assert_eq!(first, second);
        assert_ne!(first, generate_demo_sales(50, 8));
    }

    #[test]
    fn test_generated_rows_are_well_formed() {
        let sales = generate_demo_sales(200, DEMO_SEED);
        assert_eq!(sales.len(), 200);
        assert!(sales.windows(2).all(|w| w[0].date <= w[1].date));
        for sale in &sales {
            assert!(sale.date.starts_with("2024-"));
            assert_eq!(sale.date.len(), 10);
            assert!((1..=5).contains(&sale.quantity));
            assert!(sale.unit_price > 0.0);
            assert!(REGIONS.contains(&sale.region.as_str()));
            assert!(CATALOG.iter().any(|(p, c, _)| *p == sale.product && *c == sale.category));
        }
    }

    #[test]
    fn test_revenue_rounds_to_cents() {
        let sale = NewSale {
            date: "2024-01-01".to_string(),
            product: "Leather Wallet".to_string(),
            category: "Accessories".to_string(),
            region: "North".to_string(),
            quantity: 3,
            unit_price: 19.99,
            customer_id: "CUST-0001".to_string(),
        };
        assert!((sale.revenue() - 59.97).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_table() {
        let (conn, path) = temp_database().await;

        assert_eq!(seed_demo_sales(&conn).await.unwrap(), DEMO_ROWS);
        assert_eq!(seed_demo_sales(&conn).await.unwrap(), 0);

        cleanup(conn, path).await;
    }
}

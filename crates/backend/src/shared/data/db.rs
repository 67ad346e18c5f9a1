use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

use crate::shared::config::{get_database_path, Config};

use super::seed;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let db_file = get_database_path(config);
    tracing::info!("Opening database at {}", db_file.display());

    let conn = connect(&db_file).await?;
    bootstrap_schema(&conn).await?;

    if config.dashboard.seed_demo_data {
        let inserted = seed::seed_demo_sales(&conn).await?;
        if inserted > 0 {
            tracing::info!("Seeded {} demo sales rows", inserted);
        }
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Opens (creating if missing) the SQLite file at `db_file`
pub async fn connect(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    Ok(Database::connect(&db_url).await?)
}

/// Creates the `sales` table and its date index when absent
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let existing = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name='sales';".to_string(),
        ))
        .await?;

    if !existing.is_empty() {
        tracing::info!("Table sales already exists");
        return Ok(());
    }

    tracing::info!("Creating sales table");
    let create_sales_table_sql = r#"
        CREATE TABLE sales (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            product TEXT NOT NULL,
            category TEXT NOT NULL,
            region TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            unit_price REAL NOT NULL,
            revenue REAL NOT NULL,
            customer_id TEXT NOT NULL
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_sales_table_sql.to_string(),
    ))
    .await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "CREATE INDEX idx_sales_date ON sales (date);".to_string(),
    ))
    .await?;

    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}


#[cfg(test)]
mod tests {
    use super::test_support::{self, temp_database};
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let (conn, path) = temp_database().await;
        bootstrap_schema(&conn).await.unwrap();

        let tables = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' AND name='sales';".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(tables.len(), 1);

        test_support::cleanup(conn, path).await;
    }
}

use sea_orm::DatabaseConnection;
use std::future::Future;

use crate::shared::data::db::get_connection;

pub mod d100_sales_analytics;
pub mod d101_sample_data;
pub mod system;

/// Runs `query` against the shared connection
pub(crate) async fn with_db<T, Fut>(
    query: impl FnOnce(&'static DatabaseConnection) -> Fut,
) -> anyhow::Result<T>
where
    Fut: Future<Output = anyhow::Result<T>>,
{
    query(get_connection()?).await
}

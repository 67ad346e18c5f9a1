use anyhow::Result;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, JsonValue, QueryResult, Statement,
};
use serde_json::Map;

/// One literal row showing the database answers queries
const SAMPLE_QUERY: &str =
    "SELECT 'Sample' AS name, 123 AS value, datetime('now') AS timestamp";

/// Output columns of [`SAMPLE_QUERY`], in select order
const SAMPLE_COLUMNS: [&str; 3] = ["name", "value", "timestamp"];

/// Rows of the sample query as JSON objects, columns in select order
pub async fn get_sample_rows(db: &DatabaseConnection) -> Result<Vec<JsonValue>> {
    let stmt = Statement::from_string(DatabaseBackend::Sqlite, SAMPLE_QUERY.to_string());
    let rows = db.query_all(stmt).await?;

    Ok(rows
        .iter()
        .map(|row| row_to_json(row, &SAMPLE_COLUMNS))
        .collect())
}

fn row_to_json(row: &QueryResult, columns: &[&str]) -> JsonValue {
    let object: Map<String, JsonValue> = columns
        .iter()
        .map(|column| (column.to_string(), column_value(row, column)))
        .collect();
    JsonValue::Object(object)
}

/// Expression columns carry no declared type, so the value is tried as
/// integer, then real, then text.
fn column_value(row: &QueryResult, column: &str) -> JsonValue {
    if let Ok(value) = row.try_get::<Option<i64>>("", column) {
        return value.map(JsonValue::from).unwrap_or(JsonValue::Null);
    }
    if let Ok(value) = row.try_get::<Option<f64>>("", column) {
        return value.map(JsonValue::from).unwrap_or(JsonValue::Null);
    }
    row.try_get::<Option<String>>("", column)
        .ok()
        .flatten()
        .map(JsonValue::String)
        .unwrap_or(JsonValue::Null)
}

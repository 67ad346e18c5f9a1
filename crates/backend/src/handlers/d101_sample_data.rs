use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_envelope::ErrorEnvelope;

use super::with_db;
use crate::dashboards::d101_sample_data::repository;

/// GET /api/sample-data
///
/// Query failures are reported in-band as `{"error": "..."}` with status 200;
/// the dashboard client detects the envelope.
pub async fn get_sample_data() -> Response {
    let result = with_db(repository::get_sample_rows).await;
    match result {
        Ok(rows) => {
            tracing::info!("D101 Sample data: Returning {} rows", rows.len());
            Json(rows).into_response()
        }
        Err(e) => {
            tracing::error!("D101 Sample data: query failed: {}", e);
            Json(ErrorEnvelope::new(e.to_string())).into_response()
        }
    }
}

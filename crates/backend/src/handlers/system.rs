use axum::{http::StatusCode, Json};
use contracts::shared::api_envelope::ErrorEnvelope;
use contracts::shared::health::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Any unmatched /api/* path. Keeps unknown API calls from falling through to index.html.
pub async fn api_not_found() -> (StatusCode, Json<ErrorEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::new("API endpoint not found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.message, "API is running");
    }

    #[tokio::test]
    async fn test_unknown_api_path_uses_envelope() {
        let (status, Json(body)) = api_not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "API endpoint not found");
    }
}

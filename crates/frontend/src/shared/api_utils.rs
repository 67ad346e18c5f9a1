//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override of the API origin, e.g. `http://127.0.0.1:3000`
const API_BASE_ENV: Option<&str> = option_env!("SALESDASH_API_BASE_URL");

/// Get the base URL for API requests
///
/// Resolution order:
/// 1. `SALESDASH_API_BASE_URL` captured at build time
/// 2. `data-api-url` attribute on the document root
/// 3. Empty string: same-origin relative requests (the backend serves the SPA)
pub fn api_base() -> String {
    if let Some(base) = API_BASE_ENV.filter(|b| !b.is_empty()) {
        return base.to_string();
    }

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("data-api-url"))
        .filter(|url| !url.is_empty())
        .unwrap_or_default()
}

/// Build a full API URL from an endpoint path against [`api_base`].
/// Same-origin builds yield `/api/<endpoint>`.
pub fn api_url(endpoint: &str) -> String {
    join_api_url(&api_base(), endpoint)
}

/// Joins `base` and `endpoint` as `{base}/api/{endpoint}` without doubled slashes
///
/// # Example
/// ```
/// use frontend::shared::api_utils::join_api_url;
/// assert_eq!(join_api_url("", "sales/overview"), "/api/sales/overview");
/// assert_eq!(
///     join_api_url("http://127.0.0.1:8000/", "/sample-data"),
///     "http://127.0.0.1:8000/api/sample-data"
/// );
/// ```
pub fn join_api_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/api/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

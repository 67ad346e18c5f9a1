use serde::{Deserialize, Serialize};

/// In-band failure reported with a 2xx status: `{"error": "..."}`.
///
/// The sample-data endpoint answers this way when its query fails, so clients
/// must check for it before treating a body as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Extracts the message when `value` is an object with a string `error` field.
    pub fn detect(value: &serde_json::Value) -> Option<&str> {
        value.as_object()?.get("error")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_envelope() {
        assert_eq!(
            ErrorEnvelope::detect(&json!({"error": "warehouse offline"})),
            Some("warehouse offline")
        );
        assert_eq!(ErrorEnvelope::detect(&json!({"error": 42})), None);
        assert_eq!(ErrorEnvelope::detect(&json!([{"error": "x"}])), None);
        assert_eq!(ErrorEnvelope::detect(&json!({"total_revenue": 0})), None);
    }
}

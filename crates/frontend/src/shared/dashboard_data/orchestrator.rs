//! Aggregate fetch orchestrator: fan out, join, classify.

use contracts::shared::api_envelope::ErrorEnvelope;
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::gateway::{EndpointGateway, FetchError};
use super::request_set::AggregateRequestSet;

/// Every raw payload of one load cycle, keyed by endpoint path.
///
/// Iteration order is the request-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAggregateBundle {
    records: Vec<(String, Value)>,
}

impl RawAggregateBundle {
    pub fn get(&self, endpoint: &str) -> Option<&Value> {
        self.records
            .iter()
            .find(|(name, _)| name == endpoint)
            .map(|(_, value)| value)
    }

    /// Decodes the payload of `endpoint` into its typed row shape.
    ///
    /// A missing record or a shape mismatch is a `Decode` failure.
    pub fn decode<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let value = self
            .get(endpoint)
            .ok_or_else(|| FetchError::decode(endpoint, "missing from bundle"))?;
        T::deserialize(value).map_err(|e| FetchError::decode(endpoint, e))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.records.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, Value)> for RawAggregateBundle {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Fetches every endpoint of `requests` concurrently and joins the results.
///
/// Waits for all fetches to settle. If any failed, the first failure in
/// request-set order is returned and no bundle is produced.
pub async fn load<G>(
    gateway: &G,
    requests: &AggregateRequestSet,
) -> Result<RawAggregateBundle, FetchError>
where
    G: EndpointGateway + ?Sized,
{
    log::debug!("Loading {} aggregates", requests.len());

    let results = join_all(requests.iter().map(|endpoint| gateway.fetch_json(endpoint))).await;

    let mut records = Vec::with_capacity(results.len());
    for (endpoint, result) in requests.iter().zip(results) {
        let value = result?;
        if let Some(message) = ErrorEnvelope::detect(&value) {
            return Err(FetchError::backend(endpoint, message));
        }
        records.push((endpoint.to_string(), value));
    }

    Ok(RawAggregateBundle { records })
}

use serde_json::{Map, Value};

/// Endpoint path (relative to `/api/`)
pub const SAMPLE_DATA_PATH: &str = "sample-data";

/// One row of the sample query: column name -> scalar value, in select order.
pub type SampleDataRow = Map<String, Value>;

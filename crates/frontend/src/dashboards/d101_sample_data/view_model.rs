//! Generic table built from the sample query rows.

use contracts::dashboards::d101_sample_data::{SampleDataRow, SAMPLE_DATA_PATH};
use serde_json::Value;

use crate::shared::dashboard_data::{AggregateRequestSet, FetchError, RawAggregateBundle};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTableView {
    /// Keys of the first row, in the order the server sent them
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn sample_request_set() -> AggregateRequestSet {
    AggregateRequestSet::new([SAMPLE_DATA_PATH])
}

pub fn derive_sample_table(bundle: &RawAggregateBundle) -> Result<SampleTableView, FetchError> {
    let rows: Vec<SampleDataRow> = bundle.decode(SAMPLE_DATA_PATH)?;

    let columns: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(SampleTableView { columns, rows })
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! CSV source loading with per-measure failure isolation.

use crate::store::DatasetStore;
use crate::value::{Row, Value};
use crate::DataResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fixed mapping from measure name to its CSV file under the data directory.
/// Measures without an entry here have no chart and fall back to their
/// indicator list.
pub const DATA_SOURCES: &[(&str, &str)] = &[
    ("Travel Times", "travel_times.csv"),
    ("Delay", "delay.csv"),
    ("Non-SOV Travel", "non_sov_travel.csv"),
    ("Travel Time Reliability", "travel_time_reliability.csv"),
    ("Freight Reliability", "freight_reliability.csv"),
    ("Interstate Reliability", "interstate_reliability.csv"),
    ("Non-Interstate Reliability", "non_interstate_reliability.csv"),
    ("Trip Length", "trip_length.csv"),
    ("Job Access", "job_access.csv"),
    ("Fatalities", "fatalities.csv"),
];

/// Parses a header-rowed CSV stream into field-keyed rows, coercing numeric
/// fields.
pub fn read_rows<R: Read>(reader: R) -> DataResult<Vec<Row>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row = Row::new();
        for (i, field) in record.iter().enumerate() {
            if let Some(header) = headers.get(i) {
                row.insert(header.trim().to_string(), Value::coerce(field));
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

pub fn load_measure_file(path: &Path) -> DataResult<Vec<Row>> {
    let file = File::open(path)?;
    read_rows(file)
}

/// One-shot synchronous load of every data source. A failed source resolves
/// to an empty row sequence for that measure; the failure is logged, never
/// fatal.
pub fn load_all(data_dir: &Path) -> DatasetStore {
    let mut store = DatasetStore::new();
    for (measure, file) in DATA_SOURCES {
        store.insert(measure, load_or_empty(data_dir, measure, file));
    }
    store
}

pub(crate) fn load_or_empty(data_dir: &Path, measure: &str, file: &str) -> Vec<Row> {
    let path = data_dir.join(file);
    match load_measure_file(&path) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(
                measure = %measure,
                path = %path.display(),
                error = %e,
                "data source unavailable, substituting empty dataset"
            );
            Vec::new()
        }
    }
}

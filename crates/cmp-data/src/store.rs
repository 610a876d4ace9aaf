//! In-memory dataset storage.

use crate::value::Row;
use std::collections::HashMap;

/// Loaded datasets keyed by measure name. A missing key means the source has
/// not been loaded yet (the UI shows a loading placeholder); a present but
/// empty entry means the source loaded empty or failed.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: HashMap<String, Vec<Row>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, measure: &str, rows: Vec<Row>) {
        self.datasets.insert(measure.to_string(), rows);
    }

    pub fn rows(&self, measure: &str) -> Option<&[Row]> {
        self.datasets.get(measure).map(|r| r.as_slice())
    }

    pub fn is_loaded(&self, measure: &str) -> bool {
        self.datasets.contains_key(measure)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

//! cmp-data: CSV dataset loading and storage for the dashboard.

pub mod loader;
pub mod store;
pub mod value;
pub mod worker;

pub use loader::{load_all, load_measure_file, read_rows, DATA_SOURCES};
pub use store::DatasetStore;
pub use value::{Row, Value};
pub use worker::{LoadMessage, LoadWorker};

pub type DataResult<T> = Result<T, DataError>;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

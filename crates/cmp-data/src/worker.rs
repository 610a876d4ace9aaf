//! Background loader: one startup pass over the data sources, with each
//! measure's rows delivered independently as they complete.

use crate::loader::{load_or_empty, DATA_SOURCES};
use crate::value::Row;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

pub struct LoadWorker {
    pub rx: Receiver<LoadMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug, Clone)]
pub enum LoadMessage {
    Loaded { measure: String, rows: Vec<Row> },
}

impl LoadWorker {
    /// Spawns the load thread. The UI polls `rx` each frame and renders a
    /// loading placeholder for any measure whose message has not arrived.
    pub fn start(data_dir: PathBuf) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            for (measure, file) in DATA_SOURCES {
                let rows = load_or_empty(&data_dir, measure, file);
                let msg = LoadMessage::Loaded {
                    measure: measure.to_string(),
                    rows,
                };
                // Receiver dropped means the UI is gone.
                if tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Self { rx, _handle: handle }
    }
}

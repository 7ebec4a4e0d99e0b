use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading the dataset.
///
/// All of these are fatal: the dashboard does not open without a table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

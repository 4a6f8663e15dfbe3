use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error opening CSV at path: {} | {source}", .path.display())]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error)
}

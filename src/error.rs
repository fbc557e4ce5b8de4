//! Error type shared by the converter, the table loader and the bench-results loader.
//!
//! Line parsing itself never fails; only I/O and configuration can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read '{path}': {source}", path = path.display())]
    ReadPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid interpretation table: {0}")]
    Config(String),

    #[error("unexpected results structure: {0}")]
    Results(String),
}

pub type Result<T> = std::result::Result<T, Error>;

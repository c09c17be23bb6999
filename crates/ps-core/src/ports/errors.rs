use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedSourceError {
    #[error("failed to read feed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid feed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

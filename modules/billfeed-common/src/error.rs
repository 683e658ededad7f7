use std::path::PathBuf;

use thiserror::Error;

use congress_client::CongressError;

#[derive(Error, Debug)]
pub enum BillFeedError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream API error: {0}")]
    Upstream(#[from] CongressError),

    #[error("Artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

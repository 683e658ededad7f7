use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::BillFeedError;

pub const RAW_BILLS_FILE: &str = "raw_bills.json";
pub const CLEAN_BILLS_FILE: &str = "clean_bills.json";
pub const SUMMARIES_FILE: &str = "summaries.json";
pub const POSTS_FILE: &str = "posts.json";

/// Filesystem handoff point between stages: JSON artifacts under one data
/// directory. Each write replaces the previous artifact wholesale.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    data_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn raw_bills_path(&self) -> PathBuf {
        self.data_dir.join(RAW_BILLS_FILE)
    }

    pub fn clean_bills_path(&self) -> PathBuf {
        self.data_dir.join(CLEAN_BILLS_FILE)
    }

    pub fn summaries_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARIES_FILE)
    }

    pub fn posts_path(&self) -> PathBuf {
        self.data_dir.join(POSTS_FILE)
    }

    /// Read and deserialize an artifact. A missing file is a distinct error
    /// so the caller can report which upstream stage has not run.
    pub fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, BillFeedError> {
        if !path.exists() {
            return Err(BillFeedError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serialize pretty-printed JSON to `path`, creating the data directory
    /// if it does not exist yet. Overwrites any existing artifact.
    pub fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), BillFeedError> {
        fs::create_dir_all(&self.data_dir)?;
        let body = serde_json::to_string_pretty(value)?;
        fs::write(path, body)?;
        tracing::debug!(path = %path.display(), "Artifact written");
        Ok(())
    }
}

use std::env;
use std::path::PathBuf;

use crate::error::BillFeedError;

pub const DEFAULT_FETCH_LIMIT: u32 = 5;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Congress.gov API key. Empty for stages that never call the API.
    pub congress_api_key: String,
    /// Override for the API base URL (test servers). `None` = production.
    pub congress_api_base: Option<String>,
    /// Directory holding the pipeline's JSON artifacts.
    pub data_dir: PathBuf,
    /// Page size for the bill listing request.
    pub fetch_limit: u32,
}

impl Config {
    /// Load configuration for the ingest stage. The API key is required;
    /// its absence is the one fatal startup condition.
    pub fn from_env() -> Result<Self, BillFeedError> {
        let congress_api_key = env::var("CONGRESS_API_KEY")
            .map_err(|_| BillFeedError::Config("CONGRESS_API_KEY is required".to_string()))?;

        Ok(Self {
            congress_api_key,
            ..Self::stage_from_env()?
        })
    }

    /// Load configuration for the downstream stages, which read and write
    /// artifacts but never call the API. No credential needed.
    pub fn stage_from_env() -> Result<Self, BillFeedError> {
        let fetch_limit = match env::var("BILLFEED_FETCH_LIMIT") {
            Ok(raw) => raw.parse().map_err(|_| {
                BillFeedError::Config(format!("BILLFEED_FETCH_LIMIT must be a number, got {raw:?}"))
            })?,
            Err(_) => DEFAULT_FETCH_LIMIT,
        };

        Ok(Self {
            congress_api_key: String::new(),
            congress_api_base: env::var("CONGRESS_API_BASE").ok(),
            data_dir: env::var("BILLFEED_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            fetch_limit,
        })
    }
}

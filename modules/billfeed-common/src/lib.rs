pub mod artifacts;
pub mod config;
pub mod error;
pub mod types;

pub use artifacts::ArtifactStore;
pub use config::Config;
pub use error::BillFeedError;
pub use types::*;

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use billfeed_common::{ArtifactStore, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("billfeed=info".parse()?))
        .init();

    info!("Generating plain-English summaries...");

    let config = Config::stage_from_env()?;
    let store = ArtifactStore::new(&config.data_dir);
    billfeed_summarize::run(&store, Utc::now())?;
    Ok(())
}

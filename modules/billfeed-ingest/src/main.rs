use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use billfeed_common::{ArtifactStore, Config};
use congress_client::CongressClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("billfeed=info".parse()?))
        .init();

    info!("Fetching recent House bills...");

    let config = Config::from_env()?;
    let store = ArtifactStore::new(&config.data_dir);
    let client = match &config.congress_api_base {
        Some(base) => CongressClient::with_base_url(base.clone(), config.congress_api_key.clone()),
        None => CongressClient::new(config.congress_api_key.clone()),
    };

    billfeed_ingest::run(&client, &store, config.fetch_limit, Utc::now()).await?;
    Ok(())
}

//! Ensure the store-side uniqueness constraints exist. Run once per
//! deployment, before any writer traffic.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gatherly_common::Config;
use gatherly_store::{ensure_indexes, shared_database};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gatherly_store=info".parse()?)
                .add_directive("gatherly_migrate=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let client = shared_database(&config).await?;
    ensure_indexes(client.database()).await?;

    info!("migration complete");
    Ok(())
}

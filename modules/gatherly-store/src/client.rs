use mongodb::{options::ClientOptions, Client, Database};
use tokio::sync::OnceCell;
use tracing::info;

use gatherly_common::{Config, GatherlyError};

/// Thin wrapper around a `mongodb::Database` providing connection setup.
#[derive(Clone)]
pub struct StoreClient {
    db: Database,
}

impl StoreClient {
    /// Connect to MongoDB and select the given database.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, GatherlyError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| GatherlyError::Store(e.to_string()))?;
        options.app_name = Some("gatherly".to_string());
        let client =
            Client::with_options(options).map_err(|e| GatherlyError::Store(e.to_string()))?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

static SHARED: OnceCell<StoreClient> = OnceCell::const_new();

/// Process-wide lazily-established store connection.
///
/// The first caller triggers connection establishment; concurrent
/// callers during establishment await the same in-flight attempt, and
/// everyone afterwards reuses the cached client for the process
/// lifetime. A failed attempt leaves the cell empty so the next caller
/// retries.
pub async fn shared_database(config: &Config) -> Result<&'static StoreClient, GatherlyError> {
    SHARED
        .get_or_try_init(|| async {
            info!(db = %config.mongodb_db, "establishing shared MongoDB connection");
            StoreClient::connect(&config.mongodb_uri, &config.mongodb_db).await
        })
        .await
}

use anyhow::{bail, Context, Result};
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use std::env;
use tracing::debug;

pub const DATABASE_NAME: &str = "logDB";
pub const COLLECTION_NAME: &str = "logs";

/// Connects to MongoDB using `MONGO_URI` and verifies reachability.
///
/// Any failure here is fatal: the service must not accept traffic
/// without a working store handle.
pub async fn build_log_collection() -> Result<Collection<Document>> {
    let uri = env::var("MONGO_URI").unwrap_or_default();
    if uri.is_empty() {
        bail!("MONGO_URI environment variable is not set");
    }

    let client = Client::with_uri_str(&uri)
        .await
        .context("could not connect to MongoDB")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB not reachable")?;

    debug!("MongoDB client initialized successfully");
    Ok(client
        .database(DATABASE_NAME)
        .collection::<Document>(COLLECTION_NAME))
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use std::time::Duration;

/// Retention window for stored log documents (6 months).
pub const LOG_RETENTION: Duration = Duration::from_secs(15_552_000);

#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn insert(&self, document: Document) -> Result<()>;
    async fn ensure_ttl_index(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct LogRepositoryImpl {
    collection: Collection<Document>,
}

impl LogRepositoryImpl {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl LogRepository for LogRepositoryImpl {
    async fn insert(&self, document: Document) -> Result<()> {
        self.collection
            .insert_one(document)
            .await
            .context("insert_one failed")?;
        Ok(())
    }

    /// Idempotent: creating an equivalent existing index is a no-op
    /// on the server side.
    async fn ensure_ttl_index(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "timestamp": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(LOG_RETENTION)
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

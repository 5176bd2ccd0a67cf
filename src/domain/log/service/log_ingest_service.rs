use anyhow::{anyhow, Result};
use mongodb::bson::{doc, to_bson, Document};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::timeout;

use crate::api::dto::log_dto::LogEntry;
use crate::core::persistence::logs::log_repository::LogRepository;

/// Upper bound on one outbound insert so a slow store cannot pin a
/// request indefinitely.
const INSERT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct LogService<R: LogRepository> {
    repo: R,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn ingest(&self, entry: LogEntry) -> Result<Value> {
        ingest_log_with_repo(&self.repo, entry).await
    }
}

async fn ingest_log_with_repo<R: LogRepository>(repo: &R, entry: LogEntry) -> Result<Value> {
    let document = to_document(&entry)?;

    timeout(INSERT_TIMEOUT, repo.insert(document))
        .await
        .map_err(|_| anyhow!("insert timed out after {INSERT_TIMEOUT:?}"))??;

    Ok(json!({ "message": "Log entry saved successfully" }))
}

/// The five input fields go into the document verbatim; `data` stays
/// opaque structured content.
fn to_document(entry: &LogEntry) -> Result<Document> {
    Ok(doc! {
        "timestamp": &entry.timestamp,
        "issuer": &entry.issuer,
        "level": &entry.level,
        "type": &entry.entry_type,
        "data": to_bson(&entry.data)?,
    })
}

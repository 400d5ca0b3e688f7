//! Search resync
//!
//! Reads the full file snapshot and recreates each record in the search
//! index. Runs concurrently with the file migration, so it may observe float
//! values mid-backfill; the projection never reads the flag, so either
//! interleaving produces identical payloads.

use crate::clients::{SearchIndex, SearchLocation, SearchRecord};
use crate::db::entities::file;
use crate::error::{MigrationError, Result};
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tracing::info;

/// Resync job pushing the file store's snapshot into the search service.
pub struct SearchResync {
    db: DatabaseConnection,
    search: Arc<dyn SearchIndex>,
}

impl SearchResync {
    pub fn new(db: DatabaseConnection, search: Arc<dyn SearchIndex>) -> Self {
        Self { db, search }
    }

    /// Run the resync; at most one error.
    pub async fn run(self) -> Vec<MigrationError> {
        self.resync().await.err().into_iter().collect()
    }

    /// Push every file record, in the store's natural order, stopping at the
    /// first failure. No retry, no skip-and-continue: rerunning after a
    /// partial failure resends already-pushed records, which the search
    /// service deduplicates by id.
    pub async fn resync(&self) -> Result<()> {
        let files = file::Entity::find().all(&self.db).await?;
        info!("Resyncing {} file records into the search index", files.len());

        for f in files {
            let record = project(&f);
            self.search
                .create_file(&record)
                .await
                .map_err(|source| MigrationError::SearchCreate {
                    file_id: f.id.clone(),
                    source,
                })?;
        }

        Ok(())
    }
}

/// Build the denormalized search projection for one file record.
pub fn project(file: &file::Model) -> SearchRecord {
    let location = match &file.parent {
        Some(parent) => SearchLocation::Parent {
            parent: parent.clone(),
        },
        None => SearchLocation::root(),
    };

    SearchRecord {
        id: file.id.clone(),
        key: file.key.clone(),
        bucket: file.bucket.clone(),
        name: file.name.clone(),
        mime_type: file.mime_type.clone(),
        description: file.description.clone(),
        owner_id: file.owner_id.clone(),
        size: file.size,
        created_at: file.created_at.timestamp(),
        updated_at: file.updated_at.timestamp(),
        location,
        children: Vec::new(),
    }
}

//! Remote service clients
//!
//! Thin typed HTTP clients for the file and search services, consumed by the
//! jobs through the [`FileLookup`] and [`SearchIndex`] seams so tests can
//! substitute stubs.

use crate::error::ClientError;
use async_trait::async_trait;

pub mod file_service;
pub mod search_service;

pub use file_service::{FileServiceClient, RemoteFile};
pub use search_service::{SearchLocation, SearchRecord, SearchServiceClient};

/// Fetch a single owning-file record by identifier.
#[async_trait]
pub trait FileLookup: Send + Sync {
    async fn file_by_id(&self, id: &str) -> Result<RemoteFile, ClientError>;
}

/// Push one denormalized file record into the search index.
///
/// The search service must deduplicate creates by id: a rerun after a partial
/// failure resends records that were already pushed.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn create_file(&self, record: &SearchRecord) -> Result<(), ClientError>;
}

//! Error types for the migration jobs

use thiserror::Error;

/// Errors from the remote file and search service clients
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the service
    #[error("{service} returned {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },
}

/// A single error reported by a migration sub-task
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Store read or write failure
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    /// Dropping the old files index failed
    #[error("failed dropping old index {name} for the file service: {source}")]
    IndexDrop {
        name: &'static str,
        source: sea_orm::DbErr,
    },

    /// Creating the replacement files index failed
    #[error("failed creating index {name} for the file service: {source}")]
    IndexCreate {
        name: &'static str,
        source: sea_orm::DbErr,
    },

    /// The store does not report the replacement index under its expected name
    #[error("unexpected created index name: expected {expected} but found {found:?}")]
    IndexName {
        expected: &'static str,
        found: Vec<String>,
    },

    /// File lookup during creator backfill failed
    #[error("failed getting file {file_id} from the file service: {source}")]
    FileLookup {
        file_id: String,
        source: ClientError,
    },

    /// Pushing a record into the search index failed
    #[error("failed creating search record for file {file_id}: {source}")]
    SearchCreate {
        file_id: String,
        source: ClientError,
    },

    /// A job task panicked before reporting a result
    #[error("{job} job panicked: {message}")]
    JobPanicked { job: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, MigrationError>;

//! Migration jobs and their orchestrator
//!
//! The orchestrator spawns the three jobs on the runtime and joins every
//! handle unconditionally: a slow or failing job never stops its siblings,
//! and all errors end up in one [`RunReport`] built from the join results.

use crate::error::MigrationError;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub mod file;
pub mod permission;
pub mod search;

pub use file::{FileMigration, FILE_INDEX_NAME};
pub use permission::{PermissionMigration, RoleRule, ROLE_RULES};
pub use search::SearchResync;

/// Errors reported by one job.
pub struct JobReport {
    pub job: &'static str,
    pub errors: Vec<MigrationError>,
}

/// Aggregated outcome of one migration run.
pub struct RunReport {
    pub jobs: Vec<JobReport>,
}

impl RunReport {
    /// True when no job reported an error.
    pub fn is_clean(&self) -> bool {
        self.jobs.iter().all(|j| j.errors.is_empty())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &MigrationError)> + '_ {
        self.jobs
            .iter()
            .flat_map(|j| j.errors.iter().map(move |e| (j.job, e)))
    }

    /// Log every collected error, after all jobs have finished.
    pub fn log(&self) {
        for (job, err) in self.errors() {
            error!("{} job: {}", job, err);
        }
    }
}

/// Run all three jobs concurrently to completion and collect their errors.
pub async fn run_all(
    file: FileMigration,
    permission: PermissionMigration,
    search: SearchResync,
) -> RunReport {
    info!("Starting migration jobs");

    let file_task = tokio::spawn(file.run());
    let permission_task = tokio::spawn(permission.run());
    let search_task = tokio::spawn(search.run());

    let jobs = vec![
        join_job("file", file_task).await,
        join_job("permission", permission_task).await,
        join_job("search", search_task).await,
    ];

    RunReport { jobs }
}

/// Wait for one job; a panicked task is recorded as an error instead of
/// aborting the run.
async fn join_job(job: &'static str, handle: JoinHandle<Vec<MigrationError>>) -> JobReport {
    match handle.await {
        Ok(errors) => JobReport { job, errors },
        Err(e) => JobReport {
            job,
            errors: vec![MigrationError::JobPanicked {
                job,
                message: e.to_string(),
            }],
        },
    }
}

//! Binary entry point: read configuration, connect to the stores, run the
//! three migration jobs, and map the report onto the exit status.

use anyhow::Result;
use drive_migration::clients::{FileServiceClient, SearchServiceClient};
use drive_migration::config::Config;
use drive_migration::db::Database;
use drive_migration::jobs::{self, FileMigration, PermissionMigration, SearchResync};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Each job holds its own connection; the resync reads the file store
    // independently of the file migration.
    let file_db = Database::connect(&config.file_db_url).await?;
    let permission_db = Database::connect(&config.permission_db_url).await?;
    let search_file_db = Database::connect(&config.file_db_url).await?;

    let file_migration = FileMigration::new(file_db.into_conn());
    let permission_migration = PermissionMigration::new(
        permission_db.into_conn(),
        Arc::new(FileServiceClient::new(config.file_service_url)),
    );
    let search_resync = SearchResync::new(
        search_file_db.into_conn(),
        Arc::new(SearchServiceClient::new(config.search_service_url)),
    );

    let report = jobs::run_all(file_migration, permission_migration, search_resync).await;
    report.log();
    info!("Migration done");

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

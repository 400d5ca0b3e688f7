//! Environment configuration
//!
//! All four values are required; any one missing aborts the run before a
//! single job executes.

use std::env;
use thiserror::Error;

pub const ENV_FILE_DB_URL: &str = "FILE_DB_URL";
pub const ENV_PERMISSION_DB_URL: &str = "PERMISSION_DB_URL";
pub const ENV_FILE_SERVICE_URL: &str = "FILE_SERVICE_URL";
pub const ENV_SEARCH_SERVICE_URL: &str = "SEARCH_SERVICE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Startup configuration for one migration run
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL of the file service's store
    pub file_db_url: String,

    /// Connection URL of the permission service's store
    pub permission_db_url: String,

    /// Base address of the file service
    pub file_service_url: String,

    /// Base address of the search service
    pub search_service_url: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            file_db_url: required(ENV_FILE_DB_URL)?,
            permission_db_url: required(ENV_PERMISSION_DB_URL)?,
            file_service_url: required(ENV_FILE_SERVICE_URL)?,
            search_service_url: required(ENV_SEARCH_SERVICE_URL)?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

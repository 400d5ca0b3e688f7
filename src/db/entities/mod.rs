//! Entity models for the migrated stores

pub mod file;
pub mod permission;

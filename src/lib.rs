//! One-time schema migration for the file, permission and search services.
//!
//! The tool runs three independent jobs concurrently against already-populated
//! production stores:
//!
//! - [`jobs::FileMigration`] rebuilds the `name_1_parent_1_ownerID_1` index
//!   without its uniqueness constraint and backfills the `float` flag;
//! - [`jobs::PermissionMigration`] renumbers stale role values and backfills
//!   the `creator` field from the file service;
//! - [`jobs::SearchResync`] pushes a denormalized snapshot of every file
//!   record into the search service.
//!
//! Each sub-task stops at its first error; sibling sub-tasks and jobs keep
//! running. The orchestrator joins everything and reports the collected
//! errors, which drive the process exit status.

pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod jobs;

//! Shared fixtures: temp-dir SQLite stores shaped like the production
//! services' databases, plus stub remote clients.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use drive_migration::clients::{FileLookup, RemoteFile, SearchIndex, SearchRecord};
use drive_migration::db::entities::{file, permission};
use drive_migration::db::Database;
use drive_migration::error::ClientError;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, Schema, Statement};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// The unique index as the file service created it before this migration.
pub const LEGACY_INDEX_SQL: &str =
    r#"CREATE UNIQUE INDEX "name_1_parent_1_ownerID_1" ON "files" ("name", "parent", "ownerID")"#;

async fn connect(dir: &Path, name: &str) -> DatabaseConnection {
    let path = dir.join(name);
    Database::connect(&format!("sqlite://{}?mode=rwc", path.display()))
        .await
        .expect("connect to temp store")
        .into_conn()
}

/// File store with the `files` table and the legacy unique index in place.
pub async fn file_store(dir: &Path) -> DatabaseConnection {
    let db = connect(dir, "files.db").await;
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(file::Entity)))
        .await
        .expect("create files table");
    db.execute(Statement::from_string(backend, LEGACY_INDEX_SQL.to_owned()))
        .await
        .expect("create legacy index");
    db
}

/// Permission store with the `permissions` table.
pub async fn permission_store(dir: &Path) -> DatabaseConnection {
    let db = connect(dir, "permissions.db").await;
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(permission::Entity)))
        .await
        .expect("create permissions table");
    db
}

pub async fn insert_file(
    db: &DatabaseConnection,
    id: &str,
    parent: Option<&str>,
    owner: &str,
    float: Option<bool>,
) -> file::Model {
    file::ActiveModel {
        id: Set(id.to_owned()),
        name: Set(format!("{id}.txt")),
        parent: Set(parent.map(ToOwned::to_owned)),
        owner_id: Set(owner.to_owned()),
        size: Set(42),
        float: Set(float),
        bucket: Set("bucket".to_owned()),
        key: Set(format!("key-{id}")),
        mime_type: Set("text/plain".to_owned()),
        description: Set(String::new()),
        created_at: Set(Utc.timestamp_opt(1_577_836_800, 0).unwrap()),
        updated_at: Set(Utc.timestamp_opt(1_577_923_200, 0).unwrap()),
    }
    .insert(db)
    .await
    .expect("insert file")
}

pub async fn insert_permission(
    db: &DatabaseConnection,
    id: &str,
    file_id: &str,
    role: i32,
    creator: Option<&str>,
) -> permission::Model {
    permission::ActiveModel {
        id: Set(id.to_owned()),
        file_id: Set(file_id.to_owned()),
        user_id: Set(format!("user-{id}")),
        role: Set(role),
        creator: Set(creator.map(ToOwned::to_owned)),
    }
    .insert(db)
    .await
    .expect("insert permission")
}

/// File lookup stub backed by an id → owner map; unknown ids answer 404.
pub struct StubFileLookup {
    owners: HashMap<String, String>,
}

impl StubFileLookup {
    pub fn new(owners: &[(&str, &str)]) -> Self {
        Self {
            owners: owners
                .iter()
                .map(|(id, owner)| (id.to_string(), owner.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl FileLookup for StubFileLookup {
    async fn file_by_id(&self, id: &str) -> Result<RemoteFile, ClientError> {
        match self.owners.get(id) {
            Some(owner) => Ok(RemoteFile {
                id: id.to_owned(),
                owner_id: owner.clone(),
                name: String::new(),
                parent: None,
            }),
            None => Err(ClientError::Status {
                service: "file-service",
                status: 404,
                message: format!("file {id} not found"),
            }),
        }
    }
}

/// Search index stub recording every accepted record; creates for `fail_on`
/// answer 500.
#[derive(Default)]
pub struct RecordingSearchIndex {
    pub records: Mutex<Vec<SearchRecord>>,
    pub fail_on: Option<String>,
}

impl RecordingSearchIndex {
    pub fn failing_on(id: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_on: Some(id.to_owned()),
        }
    }

    pub fn pushed_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }
}

#[async_trait]
impl SearchIndex for RecordingSearchIndex {
    async fn create_file(&self, record: &SearchRecord) -> Result<(), ClientError> {
        if self.fail_on.as_deref() == Some(record.id.as_str()) {
            return Err(ClientError::Status {
                service: "search-service",
                status: 500,
                message: "injected failure".to_owned(),
            });
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

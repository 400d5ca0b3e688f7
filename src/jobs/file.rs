//! File store migration
//!
//! Two independent sub-tasks: rebuild the (name, parent, ownerID) index
//! without its uniqueness constraint, and backfill the `float` flag.

use crate::db::entities::file;
use crate::error::{MigrationError, Result};
use sea_orm::sea_query::{Expr, Index};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DeriveIden, EntityTrait, QueryFilter,
    Statement, TransactionTrait,
};
use tracing::info;

/// Canonical name of the compound index on the files collection. Both the
/// drop and the post-create verification match on this exact literal.
pub const FILE_INDEX_NAME: &str = "name_1_parent_1_ownerID_1";

#[derive(DeriveIden)]
enum Files {
    Table,
    Name,
    Parent,
    #[sea_orm(iden = "ownerID")]
    OwnerId,
}

/// Migration job for the file service's store.
pub struct FileMigration {
    db: DatabaseConnection,
}

impl FileMigration {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Run both sub-tasks concurrently; each contributes at most one error.
    pub async fn run(self) -> Vec<MigrationError> {
        let (index, float) = tokio::join!(
            self.update_name_parent_owner_index(),
            self.backfill_float()
        );

        [index.err(), float.err()].into_iter().flatten().collect()
    }

    /// Drop the unique `name_1_parent_1_ownerID_1` index and recreate it
    /// non-unique over the same three fields.
    ///
    /// Drop, create and verify run inside one transaction so every statement
    /// sees the same connection: pooled connections cache the SQLite schema,
    /// and a create landing on a connection that has not observed the drop
    /// rejects the name as already taken.
    ///
    /// Run-once: after the old index is dropped, a second invocation fails on
    /// the drop. There is no recovery here beyond manual intervention.
    pub async fn update_name_parent_owner_index(&self) -> Result<()> {
        let backend = self.db.get_database_backend();
        let txn = self.db.begin().await?;

        let drop = Index::drop()
            .name(FILE_INDEX_NAME)
            .table(Files::Table)
            .to_owned();
        txn.execute(backend.build(&drop))
            .await
            .map_err(|source| MigrationError::IndexDrop {
                name: FILE_INDEX_NAME,
                source,
            })?;

        let create = Index::create()
            .name(FILE_INDEX_NAME)
            .table(Files::Table)
            .col(Files::Name)
            .col(Files::Parent)
            .col(Files::OwnerId)
            .to_owned();
        txn.execute(backend.build(&create))
            .await
            .map_err(|source| MigrationError::IndexCreate {
                name: FILE_INDEX_NAME,
                source,
            })?;

        verify_index_name_on(&txn).await?;
        txn.commit().await?;

        info!("Recreated {} without uniqueness", FILE_INDEX_NAME);
        Ok(())
    }

    /// Check that the store reports an index on `files` under the canonical
    /// name. The old index is already gone by the time this can fail, so the
    /// error must surface rather than be swallowed.
    pub async fn verify_index_name(&self) -> Result<()> {
        verify_index_name_on(&self.db).await
    }

    /// Set `float = false` on every file record where the flag is absent, in
    /// one bulk update. Records already holding any value are excluded by the
    /// filter, so reruns are no-ops.
    pub async fn backfill_float(&self) -> Result<()> {
        let res = file::Entity::update_many()
            .col_expr(file::Column::Float, Expr::value(false))
            .filter(file::Column::Float.is_null())
            .exec(&self.db)
            .await?;

        info!("Backfilled float on {} file records", res.rows_affected);
        Ok(())
    }
}

async fn verify_index_name_on<C: ConnectionTrait>(conn: &C) -> Result<()> {
    let rows = conn
        .query_all(Statement::from_string(
            conn.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'files'"
                .to_owned(),
        ))
        .await?;

    let found = rows
        .iter()
        .map(|row| row.try_get::<String>("", "name"))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if found.iter().any(|name| name == FILE_INDEX_NAME) {
        Ok(())
    } else {
        Err(MigrationError::IndexName {
            expected: FILE_INDEX_NAME,
            found,
        })
    }
}

//! Permission store migration
//!
//! Two independent sub-tasks: renumber stale role values by rule, and
//! backfill the `creator` field from the file service.

use crate::clients::FileLookup;
use crate::db::entities::permission;
use crate::error::{MigrationError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::info;

/// One role renumbering: rewrite every record holding exactly `from` to
/// `to`. The filter targets the stale value only, so applying a rule twice
/// is a no-op.
pub struct RoleRule {
    pub name: &'static str,
    pub from: i32,
    pub to: i32,
    pub enabled: bool,
}

/// The shipped rule set. The write-role rule predates this tool with no
/// recorded intent; it stays visible but disabled rather than silently
/// renumbering live data.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        name: "read-role",
        from: 3,
        to: 2,
        enabled: true,
    },
    RoleRule {
        name: "write-role",
        from: 2,
        to: 1,
        enabled: false,
    },
];

/// Migration job for the permission service's store.
pub struct PermissionMigration {
    db: DatabaseConnection,
    files: Arc<dyn FileLookup>,
}

impl PermissionMigration {
    pub fn new(db: DatabaseConnection, files: Arc<dyn FileLookup>) -> Self {
        Self { db, files }
    }

    /// Run both sub-tasks concurrently; each contributes at most one error.
    pub async fn run(self) -> Vec<MigrationError> {
        let (roles, creator) = tokio::join!(
            self.renumber_roles(ROLE_RULES),
            self.backfill_creator()
        );

        [roles.err(), creator.err()].into_iter().flatten().collect()
    }

    /// Apply every enabled rule as one bulk update.
    pub async fn renumber_roles(&self, rules: &[RoleRule]) -> Result<()> {
        for rule in rules.iter().filter(|r| r.enabled) {
            let res = permission::Entity::update_many()
                .col_expr(permission::Column::Role, Expr::value(rule.to))
                .filter(permission::Column::Role.eq(rule.from))
                .exec(&self.db)
                .await?;

            info!(
                "Rule {}: renumbered role {} to {} on {} permission records",
                rule.name, rule.from, rule.to, res.rows_affected
            );
        }

        Ok(())
    }

    /// Load every permission record, look up its file, and set `creator` to
    /// the file's owner where creator is still absent.
    ///
    /// Fail-fast: the first failed lookup aborts the sub-task with the
    /// remaining records unprocessed. The guarded update makes the sub-task
    /// idempotent and keeps it from overwriting creators set elsewhere; a
    /// record deleted since the snapshot matches zero rows and is tolerated.
    pub async fn backfill_creator(&self) -> Result<()> {
        let permissions = permission::Entity::find().all(&self.db).await?;
        info!("Backfilling creator over {} permission records", permissions.len());

        for p in permissions {
            let file = self.files.file_by_id(&p.file_id).await.map_err(|source| {
                MigrationError::FileLookup {
                    file_id: p.file_id.clone(),
                    source,
                }
            })?;

            permission::Entity::update_many()
                .col_expr(permission::Column::Creator, Expr::value(file.owner_id))
                .filter(
                    permission::Column::Id
                        .eq(p.id)
                        .and(permission::Column::Creator.is_null()),
                )
                .exec(&self.db)
                .await?;
        }

        Ok(())
    }
}

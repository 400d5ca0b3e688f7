//! Permission entity
//!
//! `creator` is nullable until the backfill sets it to the owner of the
//! referenced file. `file_id` is a soft reference into the file service's
//! store; nothing enforces it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "fileID")]
    pub file_id: String,
    #[sea_orm(column_name = "userID")]
    pub user_id: String,
    pub role: i32,
    pub creator: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

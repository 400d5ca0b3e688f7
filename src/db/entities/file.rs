//! File entity
//!
//! `float` is nullable because historical records predate the flag; the
//! migration backfills NULL to an explicit false.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub parent: Option<String>, // References this table
    #[sea_orm(column_name = "ownerID")]
    pub owner_id: String,
    pub size: i64,
    pub float: Option<bool>,
    pub bucket: String,
    pub key: String,
    #[sea_orm(column_name = "type")]
    pub mime_type: String,
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::Parent", to = "Column::Id")]
    Parent,
}

impl ActiveModelBehavior for ActiveModel {}

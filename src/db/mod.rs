//! Store access using SeaORM
//!
//! Both stores pre-exist and are owned by their services; this tool only
//! connects to them, it never creates their tables.

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

pub mod entities;

/// Connection to one service's store
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    /// Connect to a store by URL. Failure here is fatal to the whole run.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(url.to_owned());
        opt.max_connections(5)
            .connect_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(8))
            .sqlx_logging(false); // We'll use tracing instead

        let conn = SeaDatabase::connect(opt).await?;
        info!("Connected to store at {}", url);

        Ok(Self { conn })
    }

    /// Consume the wrapper, keeping the connection
    pub fn into_conn(self) -> DatabaseConnection {
        self.conn
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entities::setting;

/// Local storage manager backed by SQLite.
#[derive(Clone)]
pub struct LocalStorage {
    pub(crate) conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (creating if needed) the database file at `path`.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create storage directory: {}", parent.display()))?;
            }
        }

        let database_url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&database_url)
            .await
            .with_context(|| format!("Failed to open local storage: {}", path.display()))
    }

    async fn connect(database_url: &str) -> Result<Self> {
        let conn = Database::connect(database_url).await?;
        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create tables that do not exist yet.
    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut settings = schema.create_table_from_entity(setting::Entity);
        settings.if_not_exists();
        self.conn.execute(backend.build(&settings)).await?;

        Ok(())
    }

    /// Close the underlying connection pool.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

use anyhow::Result;

use super::LocalStorage;
use crate::constants::{DEFAULT_TITLE, TITLE_STORAGE_KEY};
use crate::repositories::SettingRepository;

impl LocalStorage {
    /// Stored list title, or the default when none was ever saved.
    pub async fn load_title(&self) -> Result<String> {
        Ok(SettingRepository::get(&self.conn, TITLE_STORAGE_KEY)
            .await?
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()))
    }

    pub async fn save_title(&self, title: &str) -> Result<()> {
        SettingRepository::set(&self.conn, TITLE_STORAGE_KEY, title).await
    }

    /// Forget the stored title so the next load returns the default.
    pub async fn clear_title(&self) -> Result<()> {
        SettingRepository::delete(&self.conn, TITLE_STORAGE_KEY).await
    }
}

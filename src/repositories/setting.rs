//! Setting repository for database operations.

use anyhow::Result;
use sea_orm::{sea_query::OnConflict, ConnectionTrait, EntityTrait, Set};

use crate::entities::setting;

/// Repository for key-value settings.
pub struct SettingRepository;

impl SettingRepository {
    /// Get the value stored under `key`.
    pub async fn get<C>(conn: &C, key: &str) -> Result<Option<String>>
    where
        C: ConnectionTrait,
    {
        Ok(setting::Entity::find_by_id(key.to_string())
            .one(conn)
            .await?
            .map(|model| model.value))
    }

    /// Insert or overwrite the value stored under `key`.
    pub async fn set<C>(conn: &C, key: &str, value: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        let model = setting::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
        };

        setting::Entity::insert(model)
            .on_conflict(
                OnConflict::column(setting::Column::Key)
                    .update_column(setting::Column::Value)
                    .to_owned(),
            )
            .exec(conn)
            .await?;
        Ok(())
    }

    /// Remove `key`. Missing keys are not an error.
    pub async fn delete<C>(conn: &C, key: &str) -> Result<()>
    where
        C: ConnectionTrait,
    {
        setting::Entity::delete_by_id(key.to_string()).exec(conn).await?;
        Ok(())
    }
}

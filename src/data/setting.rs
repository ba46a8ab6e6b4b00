use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{model::db::SettingModel, util::time};

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every persisted setting keyed by setting key.
    pub async fn get_all(&self) -> Result<HashMap<String, String>, DbErr> {
        let settings = entity::prelude::Setting::find().all(self.db).await?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let setting = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(setting.map(|s| s.value))
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<SettingModel, DbErr> {
        let model = entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(time::now()),
            ..Default::default()
        };

        entity::prelude::Setting::insert(model)
            .on_conflict(
                OnConflict::column(entity::setting::Column::Key)
                    .update_columns([
                        entity::setting::Column::Value,
                        entity::setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}

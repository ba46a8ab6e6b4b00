//! Database fixtures for media items and their dependents.

pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

use crate::{
    model::{MediaItemModel, SeedingOverrideModel, SettingModel, TorrentModel},
    TestContext,
};

impl TestContext {
    pub fn media<'a>(&'a mut self) -> MediaFixtures<'a> {
        MediaFixtures { setup: self }
    }
}

pub struct MediaFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> MediaFixtures<'a> {
    pub async fn insert_series(
        &self,
        sonarr_id: i32,
        tvdb_id: i32,
        title: &str,
        file_path: Option<&str>,
    ) -> Result<MediaItemModel, DbErr> {
        factory::mock_series(sonarr_id, tvdb_id, title, file_path)
            .insert(&self.setup.db)
            .await
    }

    pub async fn insert_movie(
        &self,
        radarr_id: i32,
        tmdb_id: i32,
        title: &str,
        file_path: Option<&str>,
    ) -> Result<MediaItemModel, DbErr> {
        factory::mock_movie(radarr_id, tmdb_id, title, file_path)
            .insert(&self.setup.db)
            .await
    }

    /// Insert a torrent built with [`factory::mock_torrent`], optionally tweaked first.
    pub async fn insert_torrent(
        &self,
        torrent: entity::torrent::ActiveModel,
    ) -> Result<TorrentModel, DbErr> {
        torrent.insert(&self.setup.db).await
    }

    pub async fn insert_override(
        &self,
        tracker_id: Option<i32>,
        tracker_name: Option<&str>,
        min_seeding_time_seconds: Option<i64>,
        min_ratio: Option<f64>,
    ) -> Result<SeedingOverrideModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::seeding_override::ActiveModel {
            tracker_id: ActiveValue::Set(tracker_id),
            tracker_name: ActiveValue::Set(tracker_name.map(str::to_string)),
            min_seeding_time_seconds: ActiveValue::Set(min_seeding_time_seconds),
            min_ratio: ActiveValue::Set(min_ratio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await
    }

    pub async fn insert_setting(&self, key: &str, value: &str) -> Result<SettingModel, DbErr> {
        entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await
    }
}

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::TrackerType;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::db::TorrentModel, util::time};

/// Torrent state resolved during a sync pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TorrentUpsert {
    pub hash: String,
    pub name: String,
    pub content_path: Option<String>,
    /// Media item resolved by path/title matching this pass, if any.
    pub media_item_id: Option<i32>,
    pub tracker_id: Option<i32>,
    pub tracker_name: Option<String>,
    pub tracker_type: TrackerType,
    pub added_date: Option<NaiveDateTime>,
    pub seeding_time_seconds: i64,
    pub upload_bytes: i64,
    pub download_bytes: i64,
    pub ratio: f64,
    pub seeding_required_seconds: Option<i64>,
    pub seeding_required_ratio: Option<f64>,
    pub is_seeding: bool,
}

pub struct TorrentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TorrentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a torrent keyed by hash.
    ///
    /// The media item link is only written when this pass resolved one, so an
    /// existing link is never cleared by a sync that failed to match.
    ///
    /// # Arguments
    /// - `torrent` - Torrent state resolved during the sync pass
    ///
    /// # Returns
    /// - `Ok(TorrentModel)` - The stored row
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(&self, torrent: TorrentUpsert) -> Result<TorrentModel, DbErr> {
        let mut update_columns = vec![
            entity::torrent::Column::Name,
            entity::torrent::Column::ContentPath,
            entity::torrent::Column::TrackerId,
            entity::torrent::Column::TrackerName,
            entity::torrent::Column::TrackerType,
            entity::torrent::Column::AddedDate,
            entity::torrent::Column::SeedingTimeSeconds,
            entity::torrent::Column::UploadBytes,
            entity::torrent::Column::DownloadBytes,
            entity::torrent::Column::Ratio,
            entity::torrent::Column::SeedingRequiredSeconds,
            entity::torrent::Column::SeedingRequiredRatio,
            entity::torrent::Column::IsSeeding,
            entity::torrent::Column::LastSyncedAt,
        ];
        if torrent.media_item_id.is_some() {
            update_columns.push(entity::torrent::Column::MediaItemId);
        }

        let model = entity::torrent::ActiveModel {
            media_item_id: ActiveValue::Set(torrent.media_item_id),
            hash: ActiveValue::Set(torrent.hash),
            name: ActiveValue::Set(torrent.name),
            content_path: ActiveValue::Set(torrent.content_path),
            tracker_id: ActiveValue::Set(torrent.tracker_id),
            tracker_name: ActiveValue::Set(torrent.tracker_name),
            tracker_type: ActiveValue::Set(torrent.tracker_type),
            added_date: ActiveValue::Set(torrent.added_date),
            seeding_time_seconds: ActiveValue::Set(torrent.seeding_time_seconds),
            upload_bytes: ActiveValue::Set(torrent.upload_bytes),
            download_bytes: ActiveValue::Set(torrent.download_bytes),
            ratio: ActiveValue::Set(torrent.ratio),
            seeding_required_seconds: ActiveValue::Set(torrent.seeding_required_seconds),
            seeding_required_ratio: ActiveValue::Set(torrent.seeding_required_ratio),
            is_seeding: ActiveValue::Set(torrent.is_seeding),
            last_synced_at: ActiveValue::Set(time::now()),
            ..Default::default()
        };

        entity::prelude::Torrent::insert(model)
            .on_conflict(
                OnConflict::column(entity::torrent::Column::Hash)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_hash(&self, hash: &str) -> Result<Option<TorrentModel>, DbErr> {
        entity::prelude::Torrent::find()
            .filter(entity::torrent::Column::Hash.eq(hash))
            .one(self.db)
            .await
    }

    /// All torrents linked to a media item, oldest row first.
    pub async fn find_by_media_item(&self, media_item_id: i32) -> Result<Vec<TorrentModel>, DbErr> {
        entity::prelude::Torrent::find()
            .filter(entity::torrent::Column::MediaItemId.eq(media_item_id))
            .order_by_asc(entity::torrent::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_unlinked(&self) -> Result<u64, DbErr> {
        entity::prelude::Torrent::find()
            .filter(entity::torrent::Column::MediaItemId.is_null())
            .count(self.db)
            .await
    }
}

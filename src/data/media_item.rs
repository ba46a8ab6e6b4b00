use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::MediaType;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::db::MediaItemModel, util::time};

/// A series or movie as seen by its media manager, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItemUpsert {
    pub title: String,
    pub media_type: MediaType,
    /// Sonarr ID for series, Radarr ID for movies.
    pub manager_id: i32,
    pub tmdb_id: Option<i32>,
    pub tvdb_id: Option<i32>,
    pub file_path: Option<String>,
    pub file_size: i64,
    pub added_date: Option<NaiveDateTime>,
}

pub struct MediaItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or refreshes a media item keyed by its manager ID.
    ///
    /// On conflict only title, media database ID, path, size and sync time are
    /// updated; request linkage and owning user are left untouched.
    ///
    /// # Arguments
    /// - `item` - The item as reported by Sonarr (series) or Radarr (movie)
    ///
    /// # Returns
    /// - `Ok(MediaItemModel)` - The stored row
    /// - `Err(DbErr)` - Database error
    pub async fn upsert_from_manager(&self, item: MediaItemUpsert) -> Result<MediaItemModel, DbErr> {
        let now = time::now();
        let (sonarr_id, radarr_id, manager_column, secondary_column) = match item.media_type {
            MediaType::Series => (
                Some(item.manager_id),
                None,
                entity::media_item::Column::SonarrId,
                entity::media_item::Column::TvdbId,
            ),
            MediaType::Movie => (
                None,
                Some(item.manager_id),
                entity::media_item::Column::RadarrId,
                entity::media_item::Column::TmdbId,
            ),
        };

        let model = entity::media_item::ActiveModel {
            title: ActiveValue::Set(item.title),
            media_type: ActiveValue::Set(item.media_type),
            tmdb_id: ActiveValue::Set(item.tmdb_id),
            tvdb_id: ActiveValue::Set(item.tvdb_id),
            sonarr_id: ActiveValue::Set(sonarr_id),
            radarr_id: ActiveValue::Set(radarr_id),
            overseerr_request_id: ActiveValue::Set(None),
            requested_by_user_id: ActiveValue::Set(None),
            file_path: ActiveValue::Set(item.file_path),
            file_size: ActiveValue::Set(item.file_size),
            added_date: ActiveValue::Set(item.added_date),
            last_synced_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::MediaItem::insert(model)
            .on_conflict(
                OnConflict::column(manager_column)
                    .update_columns([
                        entity::media_item::Column::Title,
                        secondary_column,
                        entity::media_item::Column::FilePath,
                        entity::media_item::Column::FileSize,
                        entity::media_item::Column::LastSyncedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MediaItemModel>, DbErr> {
        entity::prelude::MediaItem::find_by_id(id).one(self.db).await
    }

    /// Finds an item of the given type by media database ID.
    ///
    /// Movies are matched by TMDB ID, series by TVDB ID.
    pub async fn find_by_external_id(
        &self,
        media_type: MediaType,
        external_id: i32,
    ) -> Result<Option<MediaItemModel>, DbErr> {
        let column = match media_type {
            MediaType::Series => entity::media_item::Column::TvdbId,
            MediaType::Movie => entity::media_item::Column::TmdbId,
        };

        entity::prelude::MediaItem::find()
            .filter(entity::media_item::Column::MediaType.eq(media_type))
            .filter(column.eq(external_id))
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<MediaItemModel>, DbErr> {
        entity::prelude::MediaItem::find()
            .order_by_asc(entity::media_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Records which request (and requesting user) brought the item in.
    ///
    /// A request without a requester keeps the owner already stored.
    pub async fn link_request(
        &self,
        id: i32,
        request_id: i32,
        requested_by_user_id: Option<i32>,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::MediaItem::update_many().col_expr(
            entity::media_item::Column::OverseerrRequestId,
            Expr::value(request_id),
        );
        if let Some(user_id) = requested_by_user_id {
            update = update.col_expr(
                entity::media_item::Column::RequestedByUserId,
                Expr::value(user_id),
            );
        }

        update
            .filter(entity::media_item::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the row; dependent torrents and watch history cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No row with that ID existed
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MediaItem::delete_many()
            .filter(entity::media_item::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

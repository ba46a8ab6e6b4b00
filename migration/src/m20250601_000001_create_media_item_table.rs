use sea_orm_migration::{prelude::*, schema::*};

static IDX_MEDIA_ITEM_SONARR_ID: &str = "idx-media_item-sonarr_id";
static IDX_MEDIA_ITEM_RADARR_ID: &str = "idx-media_item-radarr_id";
static IDX_MEDIA_ITEM_TMDB_ID: &str = "idx-media_item-tmdb_id";
static IDX_MEDIA_ITEM_TVDB_ID: &str = "idx-media_item-tvdb_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MediaItem::Id))
                    .col(string(MediaItem::Title))
                    .col(string_len(MediaItem::Type, 16))
                    .col(integer_null(MediaItem::TmdbId))
                    .col(integer_null(MediaItem::TvdbId))
                    .col(integer_null(MediaItem::SonarrId))
                    .col(integer_null(MediaItem::RadarrId))
                    .col(integer_null(MediaItem::OverseerrRequestId))
                    .col(integer_null(MediaItem::RequestedByUserId))
                    .col(text_null(MediaItem::FilePath))
                    .col(big_integer(MediaItem::FileSize).default(0))
                    .col(timestamp_null(MediaItem::AddedDate))
                    .col(timestamp(MediaItem::LastSyncedAt))
                    .col(timestamp(MediaItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDIA_ITEM_SONARR_ID)
                    .table(MediaItem::Table)
                    .col(MediaItem::SonarrId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDIA_ITEM_RADARR_ID)
                    .table(MediaItem::Table)
                    .col(MediaItem::RadarrId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDIA_ITEM_TMDB_ID)
                    .table(MediaItem::Table)
                    .col(MediaItem::TmdbId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDIA_ITEM_TVDB_ID)
                    .table(MediaItem::Table)
                    .col(MediaItem::TvdbId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [
            IDX_MEDIA_ITEM_TVDB_ID,
            IDX_MEDIA_ITEM_TMDB_ID,
            IDX_MEDIA_ITEM_RADARR_ID,
            IDX_MEDIA_ITEM_SONARR_ID,
        ] {
            manager
                .drop_index(Index::drop().name(index).table(MediaItem::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(MediaItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MediaItem {
    Table,
    Id,
    Title,
    Type,
    TmdbId,
    TvdbId,
    SonarrId,
    RadarrId,
    OverseerrRequestId,
    RequestedByUserId,
    FilePath,
    FileSize,
    AddedDate,
    LastSyncedAt,
    CreatedAt,
}

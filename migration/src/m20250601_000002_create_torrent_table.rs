use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_media_item_table::MediaItem;

static IDX_TORRENT_HASH: &str = "idx-torrent-hash";
static IDX_TORRENT_MEDIA_ITEM_ID: &str = "idx-torrent-media_item_id";
static FK_TORRENT_MEDIA_ITEM_ID: &str = "fk-torrent-media_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Torrent::Table)
                    .if_not_exists()
                    .col(pk_auto(Torrent::Id))
                    .col(integer_null(Torrent::MediaItemId))
                    .col(string(Torrent::Hash))
                    .col(text(Torrent::Name))
                    .col(text_null(Torrent::ContentPath))
                    .col(integer_null(Torrent::TrackerId))
                    .col(string_null(Torrent::TrackerName))
                    .col(string_len(Torrent::TrackerType, 16))
                    .col(timestamp_null(Torrent::AddedDate))
                    .col(big_integer(Torrent::SeedingTimeSeconds).default(0))
                    .col(big_integer(Torrent::UploadBytes).default(0))
                    .col(big_integer(Torrent::DownloadBytes).default(0))
                    .col(double(Torrent::Ratio).default(0.0))
                    .col(big_integer_null(Torrent::SeedingRequiredSeconds))
                    .col(double_null(Torrent::SeedingRequiredRatio))
                    .col(boolean(Torrent::IsSeeding).default(false))
                    .col(timestamp(Torrent::LastSyncedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TORRENT_HASH)
                    .table(Torrent::Table)
                    .col(Torrent::Hash)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TORRENT_MEDIA_ITEM_ID)
                    .table(Torrent::Table)
                    .col(Torrent::MediaItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TORRENT_MEDIA_ITEM_ID)
                    .from_tbl(Torrent::Table)
                    .from_col(Torrent::MediaItemId)
                    .to_tbl(MediaItem::Table)
                    .to_col(MediaItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TORRENT_MEDIA_ITEM_ID)
                    .table(Torrent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TORRENT_MEDIA_ITEM_ID)
                    .table(Torrent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TORRENT_HASH)
                    .table(Torrent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Torrent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Torrent {
    Table,
    Id,
    MediaItemId,
    Hash,
    Name,
    ContentPath,
    TrackerId,
    TrackerName,
    TrackerType,
    AddedDate,
    SeedingTimeSeconds,
    UploadBytes,
    DownloadBytes,
    Ratio,
    SeedingRequiredSeconds,
    SeedingRequiredRatio,
    IsSeeding,
    LastSyncedAt,
}

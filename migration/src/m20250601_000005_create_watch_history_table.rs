use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_media_item_table::MediaItem;

static IDX_WATCH_HISTORY_MEDIA_ITEM_ID: &str = "idx-watch_history-media_item_id";
static FK_WATCH_HISTORY_MEDIA_ITEM_ID: &str = "fk-watch_history-media_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WatchHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(WatchHistory::Id))
                    .col(integer(WatchHistory::MediaItemId))
                    .col(string_null(WatchHistory::UserName))
                    .col(timestamp(WatchHistory::WatchedAt))
                    .col(integer(WatchHistory::PlayCount).default(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WATCH_HISTORY_MEDIA_ITEM_ID)
                    .table(WatchHistory::Table)
                    .col(WatchHistory::MediaItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WATCH_HISTORY_MEDIA_ITEM_ID)
                    .from_tbl(WatchHistory::Table)
                    .from_col(WatchHistory::MediaItemId)
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
                    .name(FK_WATCH_HISTORY_MEDIA_ITEM_ID)
                    .table(WatchHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WATCH_HISTORY_MEDIA_ITEM_ID)
                    .table(WatchHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WatchHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WatchHistory {
    Table,
    Id,
    MediaItemId,
    UserName,
    WatchedAt,
    PlayCount,
}

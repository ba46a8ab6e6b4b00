use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_media_item_table::MediaItem;

static IDX_AUDIT_LOG_MEDIA_ITEM_ID: &str = "idx-audit_log-media_item_id";
static FK_AUDIT_LOG_MEDIA_ITEM_ID: &str = "fk-audit_log-media_item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(integer(AuditLog::UserId))
                    .col(string_len(AuditLog::Action, 32))
                    .col(integer_null(AuditLog::MediaItemId))
                    .col(string(AuditLog::MediaTitle))
                    .col(string_len(AuditLog::MediaType, 16))
                    .col(text(AuditLog::Details))
                    .col(timestamp(AuditLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUDIT_LOG_MEDIA_ITEM_ID)
                    .table(AuditLog::Table)
                    .col(AuditLog::MediaItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_AUDIT_LOG_MEDIA_ITEM_ID)
                    .from_tbl(AuditLog::Table)
                    .from_col(AuditLog::MediaItemId)
                    .to_tbl(MediaItem::Table)
                    .to_col(MediaItem::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_AUDIT_LOG_MEDIA_ITEM_ID)
                    .table(AuditLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUDIT_LOG_MEDIA_ITEM_ID)
                    .table(AuditLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuditLog {
    Table,
    Id,
    UserId,
    Action,
    MediaItemId,
    MediaTitle,
    MediaType,
    Details,
    CreatedAt,
}

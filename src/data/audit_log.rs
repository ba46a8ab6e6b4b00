use entity::sea_orm_active_enums::MediaType;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{model::db::AuditLogModel, util::time};

/// Action recorded for a media item deletion.
pub const ACTION_DELETE: &str = "delete";

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a deletion attempt with a snapshot of the item's title and type.
    pub async fn record_deletion(
        &self,
        user_id: i32,
        media_item_id: i32,
        media_title: &str,
        media_type: MediaType,
        details: String,
    ) -> Result<AuditLogModel, DbErr> {
        entity::audit_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            action: ActiveValue::Set(ACTION_DELETE.to_string()),
            media_item_id: ActiveValue::Set(Some(media_item_id)),
            media_title: ActiveValue::Set(media_title.to_string()),
            media_type: ActiveValue::Set(media_type.as_str().to_string()),
            details: ActiveValue::Set(details),
            created_at: ActiveValue::Set(time::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Most recent entries first.
    pub async fn find_recent(&self, limit: u64) -> Result<Vec<AuditLogModel>, DbErr> {
        entity::prelude::AuditLog::find()
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn find_by_title(&self, media_title: &str) -> Result<Vec<AuditLogModel>, DbErr> {
        entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::MediaTitle.eq(media_title))
            .order_by_asc(entity::audit_log::Column::Id)
            .all(self.db)
            .await
    }
}
